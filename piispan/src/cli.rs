//! This file defines the command-line interface (CLI) for the piispan application,
//! including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "piispan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract validated PII spans from token-classifier predictions",
    long_about = "piispan rebuilds character-level entity spans from per-token BIO predictions over spoken transcripts, normalizes spoken forms such as \"double oh seven\" or \"john at g mail dot com\", and drops predictions that do not look like their entity type.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts entities for every utterance in a JSONL prediction file.
    #[command(about = "Extract validated entities from a JSONL prediction file into a JSON report.")]
    Extract(ExtractCommand),

    /// Runs one entity type's validator over a piece of text.
    #[command(about = "Show how a span of text is normalized and whether it validates.")]
    Check(CheckCommand),
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// JSONL file with one utterance (id, text, offsets, label_ids) per line.
    #[arg(long, short = 'i', value_name = "FILE", default_value = "data/dev.jsonl", help = "Read utterance predictions from this JSONL file.")]
    pub input: PathBuf,

    /// Destination of the JSON report.
    #[arg(long, short = 'o', value_name = "FILE", default_value = "out/dev_pred.json", help = "Write the JSON report to this file.")]
    pub output: PathBuf,

    /// Path to a custom label configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "PIISPAN_CONFIG", help = "Path to a custom label configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Entity type to validate as, e.g. PHONE or CREDIT_CARD.
    #[arg(long, short = 'l', value_name = "TYPE", help = "Entity type to validate as (e.g. PHONE, EMAIL).")]
    pub label: String,

    /// The span text.
    #[arg(value_name = "TEXT", help = "The span text to check.")]
    pub text: String,

    /// Path to a custom label configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "PIISPAN_CONFIG", help = "Path to a custom label configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON.
    #[arg(long = "json", help = "Print the result as a JSON object.")]
    pub json: bool,
}
