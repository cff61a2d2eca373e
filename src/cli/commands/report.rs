//! Report command implementation

use super::build_evaluator;
use crate::cli::logging::log;
use crate::cli::{LogLevel, PredictionSet};
use crate::config::{OutputFormat, ReportArgs};
use crate::eval::EvaluationReport;

pub fn run_report(args: ReportArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Evaluating: {}", args.input.display()),
    );

    let evaluator = build_evaluator(args.config.as_deref(), args.threshold, level)?;
    let set = PredictionSet::from_file(&args.input).map_err(|e| format!("Input error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("  {} labeled instances", set.len()),
    );

    // Supplied predictions always drive the counts; scores add ROC and AUC
    let report = match (set.predictions.as_deref(), set.scores.as_deref()) {
        (Some(predictions), Some(scores)) => {
            evaluator.evaluate_predictions_with_scores(&set.labels, predictions, scores)
        }
        (None, Some(scores)) => evaluator.evaluate_scores(&set.labels, scores),
        _ => set
            .require_predictions()
            .and_then(|predictions| evaluator.evaluate_predictions(&set.labels, predictions)),
    }
    .map_err(|e| format!("Evaluation failed: {e}"))?;

    println!("{}", render_report(&report, args.format)?);
    Ok(())
}

/// Render a report in the requested output format
pub fn render_report(report: &EvaluationReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => report
            .to_json()
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => report
            .to_yaml()
            .map_err(|e| format!("YAML serialization error: {e}")),
    }
}
