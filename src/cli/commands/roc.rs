//! ROC command implementation

use serde::Serialize;

use super::build_evaluator;
use crate::cli::logging::log;
use crate::cli::{LogLevel, PredictionSet};
use crate::config::{OutputFormat, RocArgs};
use crate::eval::RocCurve;

/// Serialized shape of `evaluar roc --format json|yaml`
#[derive(Serialize)]
struct RocOutput<'a> {
    auc: f64,
    curve: &'a RocCurve,
}

pub fn run_roc(args: RocArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Computing ROC: {}", args.input.display()),
    );

    let evaluator = build_evaluator(args.config.as_deref(), None, level)?;
    let set = PredictionSet::from_file(&args.input).map_err(|e| format!("Input error: {e}"))?;
    let scores = set
        .require_scores()
        .map_err(|e| format!("Input error: {e}"))?;

    let (curve, auc) = evaluator
        .roc(&set.labels, scores)
        .map_err(|e| format!("ROC failed: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!("  {} instances, {} curve points", set.len(), curve.len()),
    );

    println!("{}", render_roc(&curve, auc, args.format)?);
    Ok(())
}

/// Render a curve and its AUC in the requested output format
pub fn render_roc(curve: &RocCurve, auc: f64, format: OutputFormat) -> Result<String, String> {
    let output = RocOutput { auc, curve };
    match format {
        OutputFormat::Text => Ok(format_roc_table(curve, auc)),
        OutputFormat::Json => serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(&output).map_err(|e| format!("YAML serialization error: {e}"))
        }
    }
}

fn format_roc_table(curve: &RocCurve, auc: f64) -> String {
    let mut out = format!("{:>12} {:>8} {:>8}\n", "threshold", "fpr", "tpr");
    for (threshold, point) in curve.iter() {
        out.push_str(&format!(
            "{:>12} {:>8.4} {:>8.4}\n",
            format!("{threshold:.4}"),
            point.false_positive_rate,
            point.true_positive_rate
        ));
    }
    out.push_str(&format!("\nAUC: {auc:.4}"));
    out
}
