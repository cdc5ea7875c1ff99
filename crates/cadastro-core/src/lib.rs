#![deny(missing_docs)]

//! # cadastro-core — Brazilian Registry Number Validation
//!
//! Validates and formats the two Brazilian national registry numbers:
//!
//! - **CPF** (Cadastro de Pessoas Físicas): 11 digits, `NNN.NNN.NNN-NN`.
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica): 14 digits,
//!   `NN.NNN.NNN/NNNN-NN`.
//!
//! Both identifiers share one pipeline, parameterized by a [`Scheme`]
//! (digit count, two weight tables, mask template):
//!
//! 1. [`digits::normalize`] strips everything that is not a decimal digit.
//! 2. The length must equal the scheme's digit count.
//! 3. [`digits::is_repeated_sequence`] rejects runs like `"00000000000"`,
//!    which satisfy the checksum by construction.
//! 4. [`checksum::check_digit`] computes both check digits (weighted
//!    modulo-11, remainders 0 and 1 clamp to `0`).
//! 5. The computed digits must equal the two trailing input digits.
//!
//! ## Crate Policy
//!
//! - The boolean API ([`validate::validate_one`], [`Scheme::is_valid`]) is
//!   total: any string yields `true` or `false`, never a panic or error.
//! - Diagnostics are available through [`Scheme::inspect`], which returns a
//!   structured [`ValidationError`].
//! - No I/O, no global mutable state. Every function is pure.
//! - No `.unwrap()` outside tests.

pub mod checksum;
pub mod digits;
pub mod error;
pub mod identity;
pub mod mask;
pub mod scheme;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use checksum::CheckDigits;
pub use digits::normalize;
pub use error::{CadastroError, KindParseError, ValidationError};
pub use identity::{Cnpj, Cpf, TaxId};
pub use mask::{add_mask, has_mask, remove_mask};
pub use scheme::{IdentifierKind, MaskTemplate, Scheme};
pub use validate::{inspect_batch, validate_batch, validate_one, BatchEntry, ValidityMap};
