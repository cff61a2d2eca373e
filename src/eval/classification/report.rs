//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionCounts;
use super::label::Label;
use super::metrics::BinaryMetrics;
use crate::error::Result;

/// Default row names for the negative and positive class
pub const DEFAULT_CLASS_NAMES: [&str; 2] = ["negative", "positive"];

const WIDTH: usize = 54;

/// Compute confusion counts from ground truth and hard predictions
///
/// # Example
/// ```
/// use evaluar::eval::{confusion_counts, Label::{Negative, Positive}};
///
/// let y_true = [Positive, Positive, Negative, Negative];
/// let y_pred = [Positive, Negative, Negative, Negative];
/// let counts = confusion_counts(&y_true, &y_pred).unwrap();
///
/// assert_eq!((counts.tp, counts.fn_, counts.tn, counts.fp), (1, 1, 2, 0));
/// ```
pub fn confusion_counts(y_true: &[Label], y_pred: &[Label]) -> Result<ConfusionCounts> {
    ConfusionCounts::from_labels(y_true, y_pred)
}

/// Generate an sklearn-style classification report
///
/// Undefined rates are printed as `undefined`.
pub fn classification_report(y_true: &[Label], y_pred: &[Label]) -> Result<String> {
    let metrics = BinaryMetrics::from_labels(y_true, y_pred)?;
    Ok(format_report(&metrics, DEFAULT_CLASS_NAMES))
}

/// Render a rate with two decimals, or `undefined`
pub(crate) fn fmt_rate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "undefined".to_string(),
    }
}

/// Render per-class rows, accuracy and averages
///
/// `class_names` holds the negative then the positive class name.
pub(crate) fn format_report(metrics: &BinaryMetrics, class_names: [&str; 2]) -> String {
    let mut report = String::new();

    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "", "precision", "recall", "f1-score", "support"
    ));
    report.push_str(&"-".repeat(WIDTH));
    report.push('\n');

    for (name, class) in class_names.iter().zip([Label::Negative, Label::Positive]) {
        let m = metrics.class(class);
        report.push_str(&format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
            name,
            fmt_rate(m.precision),
            fmt_rate(m.recall),
            fmt_rate(m.f1),
            m.support
        ));
    }

    report.push_str(&"-".repeat(WIDTH));
    report.push('\n');

    let total_support = metrics.total_support();
    report.push_str(&format!(
        "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
        "accuracy",
        "",
        "",
        fmt_rate(metrics.accuracy),
        total_support
    ));

    for (name, avg) in [("macro avg", Average::Macro), ("weighted avg", Average::Weighted)] {
        report.push_str(&format!(
            "{:>12} {:>10} {:>10} {:>10} {:>10}\n",
            name,
            fmt_rate(metrics.precision_avg(avg)),
            fmt_rate(metrics.recall_avg(avg)),
            fmt_rate(metrics.f1_avg(avg)),
            total_support
        ));
    }

    report
}
