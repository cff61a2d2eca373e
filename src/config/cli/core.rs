//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Evaluar: binary classification evaluation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evaluar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Evaluate binary classifiers: confusion counts, precision/recall/F1, ROC curve and AUC"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print a full evaluation report for a predictions file
    Report(ReportArgs),

    /// Print the ROC curve and AUC for a predictions file with scores
    Roc(RocArgs),

    /// Validate an evaluation configuration file
    Validate(ValidateArgs),
}

/// Arguments for the report command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Path to JSON predictions file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override decision threshold
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the roc command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RocArgs {
    /// Path to JSON predictions file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to YAML evaluation config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML evaluation config
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
