//! # Check-Digits Subcommand
//!
//! Completes a CPF body (9 digits) or CNPJ body (12 digits) with its two
//! check digits and prints the masked identifier.

use anyhow::Result;
use cadastro_core::{digits, CheckDigits, IdentifierKind};
use clap::Args;
use serde::Serialize;

use crate::config::{CliConfig, KindArg, OutputFormat};
use crate::output::render_structured;

/// Arguments for the `cadastro check-digits` subcommand.
#[derive(Args, Debug)]
pub struct CheckDigitsArgs {
    /// Identifier body without check digits; punctuation is ignored.
    #[arg(value_name = "BODY")]
    pub body: String,

    /// Identifier kind; `auto` detects from the body length (9 or 12).
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// A body completed with its check digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    /// Kind the body was completed as.
    pub kind: IdentifierKind,
    /// Normalized body.
    pub body: String,
    /// The computed check digits.
    pub check_digits: CheckDigits,
    /// Full identifier in masked form.
    pub identifier: String,
}

/// Compute the completion of `body`, or `None` if its length fits no kind.
pub fn complete(kind: KindArg, body: &str) -> Option<Completion> {
    let kind = kind.resolve_body(body)?;
    let scheme = kind.scheme();
    let normalized = digits::normalize(body);
    let full = scheme.complete(&normalized)?;
    let check_digits = scheme.check_digits(&digits::to_digits(&full))?;
    Some(Completion {
        kind,
        body: normalized,
        check_digits,
        identifier: scheme.mask.apply(&full),
    })
}

/// Execute the check-digits subcommand.
///
/// Exit code 1 when the body has the wrong number of digits.
pub fn run_check_digits(args: &CheckDigitsArgs, config: &CliConfig) -> Result<u8> {
    let kind = args.kind.unwrap_or(config.kind);
    let format = args.format.unwrap_or(config.format);

    let Some(completion) = complete(kind, &args.body) else {
        tracing::error!(body = %args.body, ?kind, "body must have 9 (CPF) or 12 (CNPJ) digits");
        return Ok(1);
    };

    match format {
        OutputFormat::Text => println!("{}", completion.identifier),
        _ => println!("{}", render_structured(&completion, format)?.trim_end()),
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_cpf_body() {
        let c = complete(KindArg::Auto, "529.982.247").unwrap();
        assert_eq!(c.kind, IdentifierKind::Cpf);
        assert_eq!(c.body, "529982247");
        assert_eq!(c.check_digits.to_string(), "25");
        assert_eq!(c.identifier, "529.982.247-25");
    }

    #[test]
    fn completes_cnpj_body() {
        let c = complete(KindArg::Auto, "112223330001").unwrap();
        assert_eq!(c.kind, IdentifierKind::Cnpj);
        assert_eq!(c.identifier, "11.222.333/0001-81");
    }

    #[test]
    fn fixed_kind_requires_matching_length() {
        assert!(complete(KindArg::Cnpj, "529982247").is_none());
        assert!(complete(KindArg::Cpf, "123456789").is_some());
    }

    #[test]
    fn undetectable_body_is_none() {
        assert!(complete(KindArg::Auto, "1234").is_none());
        assert!(complete(KindArg::Auto, "").is_none());
    }

    #[test]
    fn completion_serializes() {
        let c = complete(KindArg::Cpf, "987654321").unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["kind"], "cpf");
        assert_eq!(json["identifier"], "987.654.321-00");
        assert_eq!(json["check_digits"]["first"], 0);
    }

    fn args(body: &str, kind: Option<KindArg>) -> CheckDigitsArgs {
        CheckDigitsArgs {
            body: body.to_string(),
            kind,
            format: None,
        }
    }

    #[test]
    fn run_check_digits_exit_codes() {
        let config = CliConfig::default();
        assert_eq!(run_check_digits(&args("529982247", None), &config).unwrap(), 0);
        assert_eq!(run_check_digits(&args("112223330001", None), &config).unwrap(), 0);
        assert_eq!(run_check_digits(&args("1234", None), &config).unwrap(), 1);
        assert_eq!(run_check_digits(&args("", None), &config).unwrap(), 1);
    }

    #[test]
    fn run_check_digits_wrong_length_for_fixed_kind() {
        let config = CliConfig::default();
        assert_eq!(
            run_check_digits(&args("529982247", Some(KindArg::Cnpj)), &config).unwrap(),
            1
        );
    }

    #[test]
    fn run_check_digits_structured_output() {
        let config = CliConfig {
            kind: KindArg::Cpf,
            format: OutputFormat::Yaml,
        };
        assert_eq!(run_check_digits(&args("987654321", None), &config).unwrap(), 0);
    }
}
