//! # Mask Subcommand
//!
//! Prints each identifier in its canonical masked form, or digits-only
//! with `--remove`. Inputs with the wrong digit count are echoed unchanged.

use std::path::PathBuf;

use anyhow::Result;
use cadastro_core::{add_mask, remove_mask};
use clap::Args;

use crate::config::{CliConfig, KindArg};

/// Arguments for the `cadastro mask` subcommand.
#[derive(Args, Debug)]
pub struct MaskArgs {
    /// Identifiers to format. Read from --file or stdin when omitted.
    #[arg(value_name = "ID")]
    pub ids: Vec<String>,

    /// Identifier kind; `auto` detects from the digit count.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,

    /// Read identifiers from a file, one per line.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Strip the mask instead of adding it.
    #[arg(long)]
    pub remove: bool,
}

/// Execute the mask subcommand.
pub fn run_mask(args: &MaskArgs, config: &CliConfig) -> Result<u8> {
    let inputs = crate::collect_inputs(&args.ids, args.file.as_deref(), std::io::stdin().lock())?;
    let kind = args.kind.unwrap_or(config.kind);
    for line in format_all(kind, args.remove, &inputs) {
        println!("{line}");
    }
    Ok(0)
}

/// Mask (or unmask) every input, preserving order.
pub fn format_all(kind: KindArg, remove: bool, inputs: &[String]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| {
            if remove {
                remove_mask(input)
            } else {
                add_mask(kind.resolve(input), input)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn masks_mixed_kinds_with_auto() {
        let inputs = strings(&["52998224725", "11222333000181", "123"]);
        assert_eq!(
            format_all(KindArg::Auto, false, &inputs),
            vec!["529.982.247-25", "11.222.333/0001-81", "123"]
        );
    }

    #[test]
    fn fixed_kind_leaves_other_kind_unchanged() {
        let inputs = strings(&["11222333000181"]);
        assert_eq!(format_all(KindArg::Cpf, false, &inputs), vec!["11222333000181"]);
    }

    #[test]
    fn remove_strips_masks() {
        let inputs = strings(&["529.982.247-25", "11.222.333/0001-81"]);
        assert_eq!(
            format_all(KindArg::Auto, true, &inputs),
            vec!["52998224725", "11222333000181"]
        );
    }
}
