//! # Validated Identifier Newtypes
//!
//! [`Cpf`] and [`Cnpj`] can only be constructed from input that passes the
//! full validation pipeline, so holding one is proof of validity. Both store
//! the canonical digits-only form and render the masked form through
//! `Display`.
//!
//! [`TaxId`] accepts either kind and dispatches on the digit count.

use serde::{Deserialize, Serialize};

use crate::error::{CadastroError, ValidationError};
use crate::scheme::{IdentifierKind, Scheme};

/// Implement `Deserialize` for a newtype by deserializing a `String` and
/// routing it through `new()`, so invalid values are rejected at
/// deserialization time.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Shared surface of the two newtypes; only the scheme differs.
macro_rules! impl_registry_number {
    ($ty:ident, $scheme:expr) => {
        impl_validating_deserialize!($ty);

        impl $ty {
            /// Validate `value` (masked or not) and store its digits.
            ///
            /// # Errors
            ///
            /// Returns the [`ValidationError`] of the first failing stage.
            pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
                $scheme.inspect(value.as_ref()).map(Self)
            }

            /// Canonical digits-only form.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Masked display form.
            pub fn formatted(&self) -> String {
                $scheme.mask.apply(&self.0)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Brazilian individual taxpayer number (11 digits, `NNN.NNN.NNN-NN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cpf(String);

impl_registry_number!(Cpf, Scheme::CPF);

/// Brazilian legal-entity number (14 digits, `NN.NNN.NNN/NNNN-NN`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_registry_number!(Cnpj, Scheme::CNPJ);

impl Cnpj {
    /// The 8-digit root that identifies the company (`NN.NNN.NNN`).
    pub fn root(&self) -> &str {
        &self.0[..8]
    }

    /// The 4-digit establishment number; `0001` is the headquarters.
    pub fn branch(&self) -> &str {
        &self.0[8..12]
    }

    /// Returns `true` for the headquarters establishment.
    pub fn is_headquarters(&self) -> bool {
        self.branch() == "0001"
    }
}

/// Either kind of Brazilian registry number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TaxId {
    /// An individual.
    Cpf(Cpf),
    /// A legal entity.
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse either kind, choosing by the normalized digit count.
    ///
    /// Inputs that are neither 11 nor 14 digits are reported as a CPF
    /// length error.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] of the detected kind.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match IdentifierKind::detect(value) {
            Some(IdentifierKind::Cnpj) => Cnpj::new(value).map(Self::Cnpj),
            Some(IdentifierKind::Cpf) | None => Cpf::new(value).map(Self::Cpf),
        }
    }

    /// Parse `value` as the kind named by `kind` (`cpf` or `cnpj`, any case).
    ///
    /// # Errors
    ///
    /// [`CadastroError::KindParse`] for an unknown kind name, otherwise
    /// [`CadastroError::Validation`] when `value` fails that kind's checks.
    pub fn parse_as(kind: &str, value: &str) -> Result<Self, CadastroError> {
        let kind: IdentifierKind = kind.parse()?;
        let id = match kind {
            IdentifierKind::Cpf => Cpf::new(value).map(Self::Cpf)?,
            IdentifierKind::Cnpj => Cnpj::new(value).map(Self::Cnpj)?,
        };
        Ok(id)
    }

    /// Which registry this number belongs to.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::Cpf(_) => IdentifierKind::Cpf,
            Self::Cnpj(_) => IdentifierKind::Cnpj,
        }
    }

    /// Canonical digits-only form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }
}

impl std::fmt::Display for TaxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpf(cpf) => write!(f, "{cpf}"),
            Self::Cnpj(cnpj) => write!(f, "{cnpj}"),
        }
    }
}

impl From<Cpf> for TaxId {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for TaxId {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}
