//! # Error Hierarchy
//!
//! Structured error types built with `thiserror`.
//!
//! The boolean validation API never surfaces these: a malformed identifier
//! is simply `false`. They exist for the diagnostic path
//! ([`crate::Scheme::inspect`]) and for the validated newtypes
//! ([`crate::Cpf`], [`crate::Cnpj`]), so callers can tell *why* a value was
//! rejected. [`crate::TaxId::parse_as`] returns [`CadastroError`], since it
//! can fail on either the kind name or the value.

use thiserror::Error;

use crate::scheme::IdentifierKind;

/// Top-level error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadastroError {
    /// Identifier rejected by the validation pipeline.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Identifier kind name not recognized.
    #[error("{0}")]
    KindParse(#[from] KindParseError),
}

/// Reasons an identifier is rejected, in pipeline order.
///
/// Each variant carries the identifier kind so messages read naturally when
/// CPF and CNPJ results are mixed in one report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The normalized input does not have the required number of digits.
    #[error("invalid {kind}: expected {expected} digits, found {actual}")]
    WrongLength {
        /// Identifier kind being validated.
        kind: IdentifierKind,
        /// Required digit count (11 or 14).
        expected: usize,
        /// Digit count after normalization.
        actual: usize,
    },

    /// Every digit is the same (e.g. `111.111.111-11`).
    #[error("invalid {kind}: all digits are identical")]
    RepeatedDigits {
        /// Identifier kind being validated.
        kind: IdentifierKind,
    },

    /// The trailing check digits disagree with the computed ones.
    #[error("invalid {kind}: check digits {found} do not match computed {expected}")]
    CheckDigitMismatch {
        /// Identifier kind being validated.
        kind: IdentifierKind,
        /// Check digits computed from the body.
        expected: String,
        /// Check digits present in the input.
        found: String,
    },
}

/// An identifier kind name other than `cpf` or `cnpj`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown identifier kind: \"{0}\" (expected cpf or cnpj)")]
pub struct KindParseError(pub String);
