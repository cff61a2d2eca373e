//! Evaluar CLI
//!
//! # Usage
//!
//! ```bash
//! # Full report from labels and scores or hard predictions
//! evaluar report predictions.json
//!
//! # Report at a different threshold, as JSON
//! evaluar report predictions.json --threshold 0.3 --format json
//!
//! # ROC curve and AUC only
//! evaluar roc predictions.json --config eval.yaml
//!
//! # Validate config
//! evaluar validate eval.yaml
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
