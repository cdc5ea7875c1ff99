//! # Validate Subcommand
//!
//! Batch validation of CPF/CNPJ identifiers.
//!
//! By default the report is the masked-identifier → validity map, so inputs
//! that differ only in punctuation collapse into one line. `--explain`
//! switches to one line per input with the rejection reason.
//!
//! Exit code: 0 when every identifier is valid, 1 otherwise (including
//! when no identifiers were supplied).

use std::path::PathBuf;

use anyhow::Result;
use cadastro_core::{validate_batch, BatchEntry, ValidityMap};
use clap::Args;

use crate::config::{CliConfig, KindArg, OutputFormat};
use crate::output::render_structured;

/// Arguments for the `cadastro validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Identifiers to validate. Read from --file or stdin when omitted.
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Identifier kind; `auto` detects from the digit count.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Read identifiers from a file, one per line.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report every input separately, with the reason for each rejection.
    #[arg(long)]
    pub explain: bool,
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    let inputs = crate::collect_inputs(&args.ids, args.file.as_deref(), std::io::stdin().lock())?;
    if inputs.is_empty() {
        println!("Usage: cadastro validate [--kind auto|cpf|cnpj] [--file PATH] [ID]...");
        return Ok(1);
    }

    let kind = args.kind.unwrap_or(config.kind);
    let format = args.format.unwrap_or(config.format);
    tracing::info!(count = inputs.len(), ?kind, ?format, "validating identifiers");

    let (rendered, all_valid) = if args.explain {
        let entries = explain(kind, &inputs);
        let all_valid = entries.iter().all(|e| e.valid);
        (render_entries(&entries, format)?, all_valid)
    } else {
        let validity = validity_map(kind, &inputs);
        let all_valid = validity.values().all(|&v| v);
        (render_map(&validity, format)?, all_valid)
    };

    print!("{rendered}");
    Ok(if all_valid { 0 } else { 1 })
}

/// Build the masked-identifier → validity map.
///
/// With a fixed kind this is [`validate_batch`] directly. With `auto`,
/// each input is validated as its detected kind; later duplicates still
/// overwrite earlier ones.
pub fn validity_map(kind: KindArg, inputs: &[String]) -> ValidityMap {
    match kind.fixed() {
        Some(fixed) => validate_batch(fixed, inputs),
        None => {
            let mut validity = ValidityMap::new();
            for input in inputs {
                validity.extend(validate_batch(kind.resolve(input), [input]));
            }
            validity
        }
    }
}

/// One [`BatchEntry`] per input, in input order.
pub fn explain(kind: KindArg, inputs: &[String]) -> Vec<BatchEntry> {
    inputs
        .iter()
        .map(|input| BatchEntry::evaluate(kind.resolve(input), input))
        .collect()
}

fn verdict(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}

/// Render the validity map.
pub fn render_map(validity: &ValidityMap, format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Text {
        return render_structured(validity, format).map(with_newline);
    }

    let mut out = String::new();
    for (key, &valid) in validity {
        out.push_str(&format!("{:<8} {key}\n", verdict(valid)));
    }
    let passed = validity.values().filter(|&&v| v).count();
    out.push_str(&format!("\n{passed}/{} valid\n", validity.len()));
    Ok(out)
}

/// Render per-input entries.
pub fn render_entries(entries: &[BatchEntry], format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Text {
        return render_structured(&entries, format).map(with_newline);
    }

    let mut out = String::new();
    for entry in entries {
        match &entry.reason {
            Some(reason) => out.push_str(&format!(
                "{:<8} {} ({reason})\n",
                verdict(entry.valid),
                entry.masked
            )),
            None => out.push_str(&format!("{:<8} {}\n", verdict(entry.valid), entry.masked)),
        }
    }
    let passed = entries.iter().filter(|e| e.valid).count();
    out.push_str(&format!("\n{passed}/{} valid\n", entries.len()));
    Ok(out)
}

fn with_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadastro_core::IdentifierKind;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn validity_map_fixed_kind() {
        let inputs = strings(&["52998224725", "52998224725"]);
        let map = validity_map(KindArg::Cpf, &inputs);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("529.982.247-25"), Some(&true));
    }

    #[test]
    fn validity_map_auto_mixes_kinds() {
        let inputs = strings(&["52998224725", "11222333000181", "123"]);
        let map = validity_map(KindArg::Auto, &inputs);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("529.982.247-25"), Some(&true));
        assert_eq!(map.get("11.222.333/0001-81"), Some(&true));
        assert_eq!(map.get("123"), Some(&false));
    }

    #[test]
    fn validity_map_fixed_kind_rejects_other_kind() {
        let inputs = strings(&["11222333000181"]);
        let map = validity_map(KindArg::Cpf, &inputs);
        assert_eq!(map.get("11222333000181"), Some(&false));
    }

    #[test]
    fn explain_keeps_duplicates_and_reasons() {
        let inputs = strings(&["52998224725", "52998224725", "000.000.000-00"]);
        let entries = explain(KindArg::Auto, &inputs);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].kind, IdentifierKind::Cpf);
        assert!(entries[2].reason.as_deref().unwrap().contains("identical"));
    }

    #[test]
    fn render_map_text() {
        let inputs = strings(&["52998224725", "12345678900"]);
        let out = render_map(&validity_map(KindArg::Cpf, &inputs), OutputFormat::Text).unwrap();
        assert!(out.contains("VALID    529.982.247-25"));
        assert!(out.contains("INVALID  123.456.789-00"));
        assert!(out.ends_with("1/2 valid\n"));
    }

    #[test]
    fn render_map_json() {
        let inputs = strings(&["52998224725"]);
        let out = render_map(&validity_map(KindArg::Cpf, &inputs), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["529.982.247-25"], true);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn render_entries_text_includes_reason() {
        let inputs = strings(&["1122233300018"]);
        let out = render_entries(&explain(KindArg::Cnpj, &inputs), OutputFormat::Text).unwrap();
        assert!(out.contains("INVALID  1122233300018 (invalid CNPJ: expected 14 digits, found 13)"));
        assert!(out.ends_with("0/1 valid\n"));
    }

    #[test]
    fn render_entries_yaml() {
        let inputs = strings(&["11.222.333/0001-81"]);
        let out = render_entries(&explain(KindArg::Auto, &inputs), OutputFormat::Yaml).unwrap();
        let parsed: Vec<BatchEntry> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].valid);
        assert_eq!(parsed[0].kind, IdentifierKind::Cnpj);
    }

    fn args(ids: &[&str], explain: bool) -> ValidateArgs {
        ValidateArgs {
            ids: strings(ids),
            kind: None,
            file: None,
            format: None,
            explain,
        }
    }

    #[test]
    fn run_validate_all_valid_exits_zero() {
        let code = run_validate(
            &args(&["529.982.247-25", "11222333000181"], false),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn run_validate_any_invalid_exits_one() {
        let code = run_validate(
            &args(&["529.982.247-25", "123.456.789-00"], false),
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn run_validate_explain_follows_same_exit_code() {
        let config = CliConfig::default();
        let valid = run_validate(&args(&["52998224725", "52998224725"], true), &config).unwrap();
        assert_eq!(valid, 0);
        let mixed = run_validate(&args(&["52998224725", "00000000000"], true), &config).unwrap();
        assert_eq!(mixed, 1);
    }

    #[test]
    fn run_validate_uses_config_kind() {
        let config = CliConfig {
            kind: KindArg::Cnpj,
            format: OutputFormat::Json,
        };
        // A valid CPF is invalid when the configured kind is CNPJ.
        assert_eq!(run_validate(&args(&["52998224725"], false), &config).unwrap(), 1);
    }

    #[test]
    fn run_validate_no_input_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "\n  \n").unwrap();
        let mut empty = args(&[], false);
        empty.file = Some(path);
        assert_eq!(run_validate(&empty, &CliConfig::default()).unwrap(), 1);
    }

    #[test]
    fn run_validate_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut missing = args(&[], false);
        missing.file = Some(dir.path().join("nope.txt"));
        assert!(run_validate(&missing, &CliConfig::default()).is_err());
    }
}
