//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ValidateArgs;
use crate::eval::EvalConfig;

/// Format the effective configuration as a string
pub fn format_config_summary(config: &EvalConfig) -> String {
    [
        format!("  Threshold: {}", config.threshold),
        format!(
            "  Positive label: {} ({})",
            config.positive_label, config.class_names[1]
        ),
        format!(
            "  Negative label: {} ({})",
            config.negative_label, config.class_names[0]
        ),
        format!("  Parallel sort: {}", config.parallel),
    ]
    .join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = EvalConfig::from_file(&args.config).map_err(|e| format!("Config error: {e}"))?;
    config
        .validate()
        .map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");
    if let Some(warning) = config.parallel_warning() {
        log(level, LogLevel::Normal, &format!("Warning: {warning}"));
    }
    log(level, LogLevel::Verbose, &format_config_summary(&config));

    Ok(())
}
