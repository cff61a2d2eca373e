//! Command-line configuration
//!
//! Evaluation settings themselves live in [`crate::eval::EvalConfig`]; this
//! module only describes the `evaluar` binary's arguments.

pub mod cli;

pub use cli::{parse_args, Cli, Command, OutputFormat, ReportArgs, RocArgs, ValidateArgs};
