//! # cadastro CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cadastro_cli::check_digits::{run_check_digits, CheckDigitsArgs};
use cadastro_cli::config::CliConfig;
use cadastro_cli::mask::{run_mask, MaskArgs};
use cadastro_cli::validate::{run_validate, ValidateArgs};

/// Brazilian CPF/CNPJ validation and formatting.
///
/// Validates identifiers against their modulo-11 check digits, applies or
/// strips the canonical masks, and completes bodies with check digits.
#[derive(Parser, Debug)]
#[command(name = "cadastro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file with default flag values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers and report their validity.
    Validate(ValidateArgs),

    /// Add or remove the canonical mask.
    Mask(MaskArgs),

    /// Complete an identifier body with its two check digits.
    CheckDigits(CheckDigitsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("cadastro CLI starting");

    let result = CliConfig::load_or_default(cli.config.as_deref()).and_then(|config| {
        match &cli.command {
            Commands::Validate(args) => run_validate(args, &config),
            Commands::Mask(args) => run_mask(args, &config),
            Commands::CheckDigits(args) => run_check_digits(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
