//! # cadastro-cli — Command-Line Interface
//!
//! Provides the `cadastro` binary, a thin wrapper around `cadastro-core`.
//!
//! ## Subcommands
//!
//! - `cadastro validate` — Batch validation, text/JSON/YAML report.
//! - `cadastro mask` — Add or remove the canonical mask.
//! - `cadastro check-digits` — Complete a body with its check digits.
//!
//! ```bash
//! cadastro validate 529.982.247-25 11.222.333/0001-81
//! cadastro validate --kind cpf --file cpfs.txt --format json
//! cat cnpjs.txt | cadastro validate --kind cnpj --explain
//! cadastro mask --remove 529.982.247-25
//! cadastro check-digits 529982247
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers return `anyhow::Result<u8>` exit codes; no business logic here.
//! - Results go to stdout, logs to stderr.

pub mod check_digits;
pub mod config;
pub mod mask;
pub mod output;
pub mod validate;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Gather identifiers from the first non-empty source: positional
/// arguments, then `file`, then `stdin`.
///
/// File and stdin input is read one identifier per line; surrounding
/// whitespace is trimmed and blank lines are skipped. Positional arguments
/// are passed through untouched.
pub fn collect_inputs<R: Read>(
    ids: &[String],
    file: Option<&Path>,
    stdin: R,
) -> Result<Vec<String>> {
    if !ids.is_empty() {
        return Ok(ids.to_vec());
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read identifiers from {}", path.display()))?,
        None => std::io::read_to_string(stdin).context("failed to read identifiers from stdin")?,
    };

    let inputs: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!(count = inputs.len(), "collected identifiers");
    Ok(inputs)
}
