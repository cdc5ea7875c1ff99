//! # Canonical Masks
//!
//! Adds, detects, and removes the display punctuation of an identifier.
//! Masking is about shape only; none of these functions check the check
//! digits.

use crate::digits;
use crate::scheme::IdentifierKind;

/// Returns `true` if `input` is exactly in the canonical masked form
/// (`NNN.NNN.NNN-NN` for CPF, `NN.NNN.NNN/NNNN-NN` for CNPJ).
pub fn has_mask(kind: IdentifierKind, input: &str) -> bool {
    kind.scheme().mask.matches(input)
}

/// Apply the canonical mask.
///
/// - Already masked input is returned unchanged.
/// - Otherwise the input is normalized; if that leaves the wrong number of
///   digits the input is returned unchanged (no error). The count is taken
///   after normalizing, not from the raw string length, so partially
///   punctuated input such as `"529982247-25"` is masked rather than
///   passed through.
/// - Otherwise the separators are interleaved into the digits.
///
/// Idempotent: `add_mask(k, &add_mask(k, x)) == add_mask(k, x)`.
pub fn add_mask(kind: IdentifierKind, input: &str) -> String {
    let mask = &kind.scheme().mask;
    if mask.matches(input) {
        return input.to_string();
    }

    let normalized = digits::normalize(input);
    if normalized.len() != mask.digit_count() {
        return input.to_string();
    }
    mask.apply(&normalized)
}

/// Strip the mask (and anything else that is not a digit).
pub fn remove_mask(input: &str) -> String {
    digits::normalize(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CPF: IdentifierKind = IdentifierKind::Cpf;
    const CNPJ: IdentifierKind = IdentifierKind::Cnpj;

    #[test]
    fn add_mask_cpf_digits() {
        assert_eq!(add_mask(CPF, "52998224725"), "529.982.247-25");
    }

    #[test]
    fn add_mask_cnpj_digits() {
        assert_eq!(add_mask(CNPJ, "11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn add_mask_already_masked_unchanged() {
        assert_eq!(add_mask(CPF, "529.982.247-25"), "529.982.247-25");
        assert_eq!(add_mask(CNPJ, "11.222.333/0001-81"), "11.222.333/0001-81");
    }

    #[test]
    fn add_mask_wrong_length_is_noop() {
        assert_eq!(add_mask(CPF, "1234"), "1234");
        assert_eq!(add_mask(CNPJ, "1122233300018"), "1122233300018");
        assert_eq!(add_mask(CPF, ""), "");
        assert_eq!(add_mask(CPF, "not a cpf"), "not a cpf");
    }

    #[test]
    fn add_mask_partial_punctuation_is_normalized() {
        assert_eq!(add_mask(CPF, "529982247-25"), "529.982.247-25");
        assert_eq!(add_mask(CNPJ, "11 222 333 0001 81"), "11.222.333/0001-81");
    }

    #[test]
    fn add_mask_does_not_check_validity() {
        assert_eq!(add_mask(CPF, "12345678900"), "123.456.789-00");
    }

    #[test]
    fn add_mask_kind_mismatch_is_noop() {
        assert_eq!(add_mask(CNPJ, "52998224725"), "52998224725");
        assert_eq!(add_mask(CPF, "11222333000181"), "11222333000181");
    }

    #[test]
    fn add_mask_idempotent_examples() {
        for input in ["52998224725", "529982247-25", "abc", "11.222.333/0001-81"] {
            for kind in IdentifierKind::ALL {
                let once = add_mask(kind, input);
                assert_eq!(add_mask(kind, &once), once, "input {input:?} kind {kind}");
            }
        }
    }

    #[test]
    fn has_mask_checks_shape() {
        assert!(has_mask(CPF, "123.456.789-00"));
        assert!(!has_mask(CPF, "12345678900"));
        assert!(has_mask(CNPJ, "00.000.000/0000-00"));
        assert!(!has_mask(CNPJ, "529.982.247-25"));
    }

    #[test]
    fn remove_mask_strips_punctuation() {
        assert_eq!(remove_mask("529.982.247-25"), "52998224725");
        assert_eq!(remove_mask("11.222.333/0001-81"), "11222333000181");
    }
}
