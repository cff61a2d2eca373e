//! ROC curve construction by sorted threshold sweep

use serde::Serialize;

use super::auc::auc;
use crate::error::{EvalError, Result};
use crate::eval::classification::Label;

/// One point of a ROC curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RocPoint {
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

impl RocPoint {
    /// The (0, 0) anchor reached by a threshold above every score
    pub const ORIGIN: RocPoint = RocPoint::new(0.0, 0.0);

    pub const fn new(false_positive_rate: f64, true_positive_rate: f64) -> Self {
        Self {
            false_positive_rate,
            true_positive_rate,
        }
    }
}

/// ROC points ordered by decreasing threshold, with the threshold of each point
///
/// `thresholds[0]` is `+inf` (the origin); every later threshold is a distinct
/// score present in the input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
    thresholds: Vec<f64>,
}

impl RocCurve {
    /// Curve points from (0, 0) to (1, 1)
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Threshold producing each point
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a curve built by [`roc_curve`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate `(threshold, point)` pairs in curve order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &RocPoint)> + '_ {
        self.thresholds.iter().copied().zip(self.points.iter())
    }

    /// Area under this curve
    pub fn auc(&self) -> Result<f64> {
        auc(&self.points)
    }
}

/// Compute the ROC curve of `scores` against ground truth
///
/// Instances are ranked by descending score and true/false positives are
/// accumulated in that order. A point is emitted only once every instance
/// sharing the current score has been consumed, so tied scores map to a
/// single point. Rates are integer counts over class totals.
///
/// # Errors
/// - [`EvalError::ShapeMismatch`] if the lengths differ
/// - [`EvalError::NonFiniteScore`] if a score is NaN or infinite
/// - [`EvalError::DegenerateLabels`] if only one class is present
///
/// # Example
/// ```
/// use evaluar::eval::{roc_curve, LabelEncoding, RocPoint};
///
/// let labels = LabelEncoding::default().decode(&[1, 1, 0, 0]).unwrap();
/// let curve = roc_curve(&labels, &[0.9, 0.6, 0.4, 0.1]).unwrap();
///
/// assert_eq!(curve.points()[2], RocPoint::new(0.0, 1.0));
/// assert_eq!(curve.auc().unwrap(), 1.0);
/// ```
pub fn roc_curve(y_true: &[Label], scores: &[f64]) -> Result<RocCurve> {
    roc_curve_with(y_true, scores, false)
}

/// [`roc_curve`] with an optional parallel sort (needs the `parallel` feature)
pub(crate) fn roc_curve_with(y_true: &[Label], scores: &[f64], parallel: bool) -> Result<RocCurve> {
    if y_true.len() != scores.len() {
        return Err(EvalError::ShapeMismatch {
            labels: y_true.len(),
            values: scores.len(),
        });
    }
    if let Some((index, &score)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(EvalError::NonFiniteScore { index, score });
    }

    let positives = y_true.iter().filter(|l| l.is_positive()).count();
    let negatives = y_true.len() - positives;
    if positives == 0 || negatives == 0 {
        let class = if positives == 0 {
            Label::Negative
        } else {
            Label::Positive
        };
        return Err(EvalError::DegenerateLabels {
            class,
            count: y_true.len(),
        });
    }

    let order = rank_descending(scores, parallel);

    let mut points = Vec::with_capacity(order.len() + 1);
    let mut thresholds = Vec::with_capacity(order.len() + 1);
    points.push(RocPoint::ORIGIN);
    thresholds.push(f64::INFINITY);

    let (mut tp, mut fp) = (0usize, 0usize);
    for (rank, &i) in order.iter().enumerate() {
        if y_true[i].is_positive() {
            tp += 1;
        } else {
            fp += 1;
        }

        let group_ends = order
            .get(rank + 1)
            .map_or(true, |&next| scores[next] != scores[i]);
        if group_ends {
            points.push(RocPoint::new(
                fp as f64 / negatives as f64,
                tp as f64 / positives as f64,
            ));
            thresholds.push(scores[i]);
        }
    }

    Ok(RocCurve { points, thresholds })
}

/// Indices of `scores` ordered from highest to lowest score
fn rank_descending(scores: &[f64], parallel: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    let by_score_desc = |a: &usize, b: &usize| scores[*b].total_cmp(&scores[*a]);

    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::slice::ParallelSliceMut;
            order.par_sort_by(by_score_desc);
            return order;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    order.sort_by(by_score_desc);
    order
}
