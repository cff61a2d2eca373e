//! Confusion counts for binary classification

use serde::{Deserialize, Serialize};
use std::fmt;

use super::label::Label;
use crate::error::{EvalError, Result};

/// `num / den`, or `None` when the denominator is zero
pub(crate) fn ratio(num: usize, den: usize) -> Option<f64> {
    if den == 0 {
        None
    } else {
        Some(num as f64 / den as f64)
    }
}

/// Harmonic mean of precision and recall; undefined when either input is
/// undefined or both are zero
pub(crate) fn f1_from(precision: Option<f64>, recall: Option<f64>) -> Option<f64> {
    let (p, r) = (precision?, recall?);
    if p + r > 0.0 {
        Some(2.0 * p * r / (p + r))
    } else {
        None
    }
}

/// Outcome counts of a binary classifier at one decision threshold
///
/// Invariant: `tp + fp + tn + fn_` equals the number of paired observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// Positive instances predicted positive
    pub tp: usize,
    /// Negative instances predicted positive
    pub fp: usize,
    /// Negative instances predicted negative
    pub tn: usize,
    /// Positive instances predicted negative
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Create from explicit counts
    pub fn new(tp: usize, fp: usize, tn: usize, fn_: usize) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    /// Count outcomes from ground truth and hard predictions in one pass
    pub fn from_labels(y_true: &[Label], y_pred: &[Label]) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(EvalError::ShapeMismatch {
                labels: y_true.len(),
                values: y_pred.len(),
            });
        }

        let mut counts = Self::default();
        for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
            counts.record(truth, pred);
        }
        Ok(counts)
    }

    /// Count outcomes classifying `score >= threshold` as positive
    pub fn at_threshold(y_true: &[Label], scores: &[f64], threshold: f64) -> Result<Self> {
        if y_true.len() != scores.len() {
            return Err(EvalError::ShapeMismatch {
                labels: y_true.len(),
                values: scores.len(),
            });
        }

        let mut counts = Self::default();
        for (&truth, &score) in y_true.iter().zip(scores.iter()) {
            counts.record(truth, Label::from_score(score, threshold));
        }
        Ok(counts)
    }

    fn record(&mut self, truth: Label, pred: Label) {
        match (truth, pred) {
            (Label::Positive, Label::Positive) => self.tp += 1,
            (Label::Negative, Label::Positive) => self.fp += 1,
            (Label::Negative, Label::Negative) => self.tn += 1,
            (Label::Positive, Label::Negative) => self.fn_ += 1,
        }
    }

    /// The same matrix seen with the negative class treated as positive
    pub fn flipped(&self) -> Self {
        Self {
            tp: self.tn,
            fp: self.fn_,
            tn: self.tp,
            fn_: self.fp,
        }
    }

    /// Total number of observations
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// Ground-truth instances of a class
    pub fn support(&self, class: Label) -> usize {
        match class {
            Label::Positive => self.tp + self.fn_,
            Label::Negative => self.tn + self.fp,
        }
    }

    /// (TP + TN) / total
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.tp + self.tn, self.total())
    }

    /// TP / (TP + FP)
    pub fn precision(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fp)
    }

    /// TP / (TP + FN), the true positive rate
    pub fn recall(&self) -> Option<f64> {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// FP / (FP + TN)
    pub fn false_positive_rate(&self) -> Option<f64> {
        ratio(self.fp, self.fp + self.tn)
    }

    /// TN / (TN + FP), the true negative rate
    pub fn specificity(&self) -> Option<f64> {
        ratio(self.tn, self.tn + self.fp)
    }

    /// TN / (TN + FN)
    pub fn negative_predictive_value(&self) -> Option<f64> {
        ratio(self.tn, self.tn + self.fn_)
    }

    /// Harmonic mean of precision and recall
    pub fn f1(&self) -> Option<f64> {
        f1_from(self.precision(), self.recall())
    }

    /// Matthews correlation coefficient, undefined when any marginal is empty
    pub fn mcc(&self) -> Option<f64> {
        let (tp, fp, tn, fn_) = (
            self.tp as f64,
            self.fp as f64,
            self.tn as f64,
            self.fn_ as f64,
        );
        let denom = ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
        if denom > 0.0 {
            Some((tp * tn - fp * fn_) / denom)
        } else {
            None
        }
    }
}

impl fmt::Display for ConfusionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;
        writeln!(f, "{:>14} {:>10} {:>10}", "", "Pred neg", "Pred pos")?;
        writeln!(f, "{:>14} {:>10} {:>10}", "True negative", self.tn, self.fp)?;
        writeln!(f, "{:>14} {:>10} {:>10}", "True positive", self.fn_, self.tp)?;
        Ok(())
    }
}
