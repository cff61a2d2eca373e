//! CLI command implementations

mod report;
mod roc;
mod validate;


use std::path::Path;

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::eval::{ClassificationEvaluator, EvalConfig};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Report(args) => report::run_report(args, log_level),
        Command::Roc(args) => roc::run_roc(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}

/// Build an evaluator from an optional config file and threshold override
fn build_evaluator(
    config: Option<&Path>,
    threshold: Option<f64>,
    level: LogLevel,
) -> Result<ClassificationEvaluator, String> {
    let mut eval_config = match config {
        Some(path) => {
            log(
                level,
                LogLevel::Verbose,
                &format!("Loading config: {}", path.display()),
            );
            EvalConfig::from_file(path).map_err(|e| format!("Config error: {e}"))?
        }
        None => EvalConfig::default(),
    };

    if let Some(t) = threshold {
        eval_config.threshold = t;
    }

    if let Some(warning) = eval_config.parallel_warning() {
        log(level, LogLevel::Normal, &format!("Warning: {warning}"));
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  threshold: {}, positive_label: {}, negative_label: {}",
            eval_config.threshold, eval_config.positive_label, eval_config.negative_label
        ),
    );

    ClassificationEvaluator::new(eval_config).map_err(|e| format!("Config error: {e}"))
}
