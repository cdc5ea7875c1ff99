//! # Identifier Schemes
//!
//! A [`Scheme`] bundles everything that distinguishes CPF from CNPJ: the
//! digit count, the two weight tables, and the mask template. The
//! validation pipeline is written once against a `Scheme` and instantiated
//! as [`Scheme::CPF`] and [`Scheme::CNPJ`].
//!
//! | Kind | Digits | Mask                 |
//! |------|--------|----------------------|
//! | CPF  | 11     | `NNN.NNN.NNN-NN`     |
//! | CNPJ | 14     | `NN.NNN.NNN/NNNN-NN` |

use serde::{Deserialize, Serialize};

use crate::checksum::{self, CheckDigits};
use crate::digits;
use crate::error::{KindParseError, ValidationError};

/// Which Brazilian registry an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Cadastro de Pessoas Físicas (individuals, 11 digits).
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (legal entities, 14 digits).
    Cnpj,
}

impl IdentifierKind {
    /// Every supported kind.
    pub const ALL: [IdentifierKind; 2] = [IdentifierKind::Cpf, IdentifierKind::Cnpj];

    /// The scheme that validates and formats this kind.
    pub fn scheme(self) -> &'static Scheme {
        match self {
            Self::Cpf => &Scheme::CPF,
            Self::Cnpj => &Scheme::CNPJ,
        }
    }

    /// Lowercase name, as accepted by [`str::parse`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }

    /// Guess the kind from the normalized digit count (11 → CPF, 14 → CNPJ).
    ///
    /// Returns `None` for any other length. Does not validate the checksum.
    pub fn detect(input: &str) -> Option<Self> {
        let count = digits::normalize(input).len();
        Self::ALL
            .into_iter()
            .find(|kind| kind.scheme().digit_count == count)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
        }
    }
}

impl std::str::FromStr for IdentifierKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// Canonical punctuation layout: digit groups separated by fixed literals.
///
/// `separators[i]` follows `groups[i]`; the last group has no separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskTemplate {
    groups: &'static [usize],
    separators: &'static [char],
}

impl MaskTemplate {
    /// `NNN.NNN.NNN-NN`
    pub const CPF: MaskTemplate = MaskTemplate {
        groups: &[3, 3, 3, 2],
        separators: &['.', '.', '-'],
    };

    /// `NN.NNN.NNN/NNNN-NN`
    pub const CNPJ: MaskTemplate = MaskTemplate {
        groups: &[2, 3, 3, 4, 2],
        separators: &['.', '.', '/', '-'],
    };

    /// Number of digits the template holds.
    pub fn digit_count(&self) -> usize {
        self.groups.iter().sum()
    }

    /// Length of a masked value in characters.
    pub fn masked_len(&self) -> usize {
        self.digit_count() + self.separators.len()
    }

    /// Interleave the separators into `digits`.
    ///
    /// The caller guarantees `digits` holds exactly [`Self::digit_count`]
    /// characters.
    pub fn apply(&self, digits: &str) -> String {
        let mut out = String::with_capacity(self.masked_len());
        let mut chars = digits.chars();
        for (i, &len) in self.groups.iter().enumerate() {
            out.extend(chars.by_ref().take(len));
            if let Some(&sep) = self.separators.get(i) {
                out.push(sep);
            }
        }
        out
    }

    /// Returns `true` if `input` has exactly the masked shape: ASCII digits
    /// in every group position, the literal separators in between, nothing
    /// before or after.
    pub fn matches(&self, input: &str) -> bool {
        let mut chars = input.chars();
        for (i, &len) in self.groups.iter().enumerate() {
            for _ in 0..len {
                match chars.next() {
                    Some(c) if c.is_ascii_digit() => {}
                    _ => return false,
                }
            }
            if let Some(&sep) = self.separators.get(i) {
                if chars.next() != Some(sep) {
                    return false;
                }
            }
        }
        chars.next().is_none()
    }

    /// Human-readable pattern with `N` standing for a digit.
    pub fn pattern(&self) -> String {
        let placeholder: String = "N".repeat(self.digit_count());
        self.apply(&placeholder)
    }
}

/// Everything that parameterizes the validation pipeline for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    /// Kind this scheme validates.
    pub kind: IdentifierKind,
    /// Total digits including the two check digits.
    pub digit_count: usize,
    /// Weights for the first check digit; one per body digit.
    pub first_weights: &'static [u32],
    /// Weights for the second check digit; one per body digit plus one.
    pub second_weights: &'static [u32],
    /// Canonical punctuation layout.
    pub mask: MaskTemplate,
}

impl Scheme {
    /// CPF: 11 digits.
    pub const CPF: Scheme = Scheme {
        kind: IdentifierKind::Cpf,
        digit_count: 11,
        first_weights: &checksum::CPF_FIRST_WEIGHTS,
        second_weights: &checksum::CPF_SECOND_WEIGHTS,
        mask: MaskTemplate::CPF,
    };

    /// CNPJ: 14 digits.
    pub const CNPJ: Scheme = Scheme {
        kind: IdentifierKind::Cnpj,
        digit_count: 14,
        first_weights: &checksum::CNPJ_FIRST_WEIGHTS,
        second_weights: &checksum::CNPJ_SECOND_WEIGHTS,
        mask: MaskTemplate::CNPJ,
    };

    /// Number of digits preceding the check digits (9 or 12).
    pub fn body_len(&self) -> usize {
        self.digit_count - 2
    }

    /// Compute both check digits from the leading body digits.
    ///
    /// Only the first [`Self::body_len`] digits are read, so a complete
    /// identifier can be passed as-is. Returns `None` if fewer digits are
    /// supplied.
    pub fn check_digits(&self, digits: &[u8]) -> Option<CheckDigits> {
        let body = digits.get(..self.body_len())?;
        let first = checksum::check_digit(body, self.first_weights);

        let mut extended = Vec::with_capacity(body.len() + 1);
        extended.extend_from_slice(body);
        extended.push(first);
        let second = checksum::check_digit(&extended, self.second_weights);

        Some(CheckDigits { first, second })
    }

    /// Run the full pipeline and explain a rejection.
    ///
    /// On success returns the normalized digits-only form.
    ///
    /// # Errors
    ///
    /// Returns the first failing stage as a [`ValidationError`]:
    /// wrong length, repeated digits, or a check digit mismatch.
    pub fn inspect(&self, input: &str) -> Result<String, ValidationError> {
        let normalized = digits::normalize(input);
        let wrong_length = || ValidationError::WrongLength {
            kind: self.kind,
            expected: self.digit_count,
            actual: normalized.len(),
        };

        if normalized.len() != self.digit_count {
            return Err(wrong_length());
        }
        if digits::is_repeated_sequence(&normalized) {
            return Err(ValidationError::RepeatedDigits { kind: self.kind });
        }

        let numbers = digits::to_digits(&normalized);
        let expected = self.check_digits(&numbers).ok_or_else(wrong_length)?;

        // Normalized input is ASCII, so byte offsets are char offsets.
        let found = &normalized[self.body_len()..];
        let (first, second) = expected.as_chars();
        let mut tail = found.chars();
        if tail.next() != Some(first) || tail.next() != Some(second) {
            return Err(ValidationError::CheckDigitMismatch {
                kind: self.kind,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }

        Ok(normalized)
    }

    /// Returns `true` if `input` is a valid identifier of this kind.
    ///
    /// Total: any string yields a boolean.
    pub fn is_valid(&self, input: &str) -> bool {
        match self.inspect(input) {
            Ok(_) => true,
            Err(reason) => {
                tracing::trace!(%reason, "identifier rejected");
                false
            }
        }
    }

    /// Append both check digits to a body.
    ///
    /// `body` is normalized first and must then hold exactly
    /// [`Self::body_len`] digits. Returns the digits-only identifier, or
    /// `None` on a length mismatch.
    pub fn complete(&self, body: &str) -> Option<String> {
        let normalized = digits::normalize(body);
        if normalized.len() != self.body_len() {
            return None;
        }
        let check = self.check_digits(&digits::to_digits(&normalized))?;
        Some(format!("{normalized}{check}"))
    }
}
