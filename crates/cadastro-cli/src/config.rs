//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`, supplying defaults for the
//! subcommand flags. A flag given on the command line always wins.
//!
//! ```yaml
//! kind: cnpj      # auto | cpf | cnpj
//! format: json    # text | json | yaml
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use cadastro_core::IdentifierKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier kind as selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindArg {
    /// Detect from the digit count (11 → CPF, 14 → CNPJ).
    #[default]
    Auto,
    /// Individual taxpayer number.
    Cpf,
    /// Legal-entity number.
    Cnpj,
}

impl KindArg {
    /// Kind to use for a complete identifier.
    ///
    /// Undetectable inputs fall back to CPF so they are reported invalid
    /// with a CPF length error.
    pub fn resolve(self, input: &str) -> IdentifierKind {
        match self {
            Self::Cpf => IdentifierKind::Cpf,
            Self::Cnpj => IdentifierKind::Cnpj,
            Self::Auto => IdentifierKind::detect(input).unwrap_or(IdentifierKind::Cpf),
        }
    }

    /// Kind to use for a body without check digits (9 → CPF, 12 → CNPJ).
    pub fn resolve_body(self, body: &str) -> Option<IdentifierKind> {
        match self {
            Self::Cpf => Some(IdentifierKind::Cpf),
            Self::Cnpj => Some(IdentifierKind::Cnpj),
            Self::Auto => {
                let count = cadastro_core::normalize(body).len();
                IdentifierKind::ALL
                    .into_iter()
                    .find(|kind| kind.scheme().body_len() == count)
            }
        }
    }

    /// The fixed kind, or `None` for auto-detection.
    pub fn fixed(self) -> Option<IdentifierKind> {
        match self {
            Self::Auto => None,
            Self::Cpf => Some(IdentifierKind::Cpf),
            Self::Cnpj => Some(IdentifierKind::Cnpj),
        }
    }
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// YAML document.
    Yaml,
}

/// Defaults loaded from the `--config` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default identifier kind.
    pub kind: KindArg,
    /// Default output format.
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, else return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
