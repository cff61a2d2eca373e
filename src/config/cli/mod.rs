//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! evaluar report predictions.json
//! evaluar report predictions.json --threshold 0.3 --format json
//! evaluar roc predictions.json --config eval.yaml
//! evaluar validate eval.yaml
//! ```

mod core;
mod types;

pub use core::{parse_args, Cli, Command, ReportArgs, RocArgs, ValidateArgs};
pub use types::OutputFormat;
