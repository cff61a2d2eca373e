//! Area under the ROC curve by the trapezoidal rule

use super::curve::{roc_curve, RocPoint};
use crate::error::{EvalError, Result};
use crate::eval::classification::Label;

/// Integrate a ROC curve with the trapezoidal rule
///
/// Points must be ordered by non-decreasing false positive rate; they are
/// never re-sorted. Vertical segments (equal FPR) contribute nothing.
///
/// # Errors
/// - [`EvalError::EmptyCurve`] for fewer than 2 points
/// - [`EvalError::InvalidRocPoint`] for a rate outside [0, 1] or NaN
/// - [`EvalError::UnsortedCurve`] where the FPR decreases
pub fn auc(points: &[RocPoint]) -> Result<f64> {
    if points.len() < 2 {
        return Err(EvalError::EmptyCurve {
            points: points.len(),
        });
    }

    let unit = 0.0..=1.0;
    if let Some(index) = points.iter().position(|p| {
        !unit.contains(&p.false_positive_rate) || !unit.contains(&p.true_positive_rate)
    }) {
        return Err(EvalError::InvalidRocPoint { index });
    }

    if let Some(index) = points
        .windows(2)
        .position(|w| w[1].false_positive_rate < w[0].false_positive_rate)
    {
        return Err(EvalError::UnsortedCurve { index: index + 1 });
    }

    let area: f64 = points
        .windows(2)
        .map(|w| {
            let dx = w[1].false_positive_rate - w[0].false_positive_rate;
            dx * (w[0].true_positive_rate + w[1].true_positive_rate) / 2.0
        })
        .sum();

    // Rounding can push a full-area sum a few ulps past 1
    Ok(area.clamp(0.0, 1.0))
}

/// ROC AUC of `scores` against ground truth
pub fn roc_auc_score(y_true: &[Label], scores: &[f64]) -> Result<f64> {
    roc_curve(y_true, scores)?.auc()
}
