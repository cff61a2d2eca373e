//! Per-class and averaged binary classification metrics

use serde::{Deserialize, Serialize};

use super::average::Average;
use super::confusion::{f1_from, ConfusionCounts};
use super::label::Label;
use crate::error::Result;

/// Precision, recall, F1 and support for one class
///
/// Rates are `None` when their denominator is zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
    pub support: usize,
}

impl ClassMetrics {
    /// Metrics for the class that `counts` treats as positive
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        let precision = counts.precision();
        let recall = counts.recall();
        Self {
            precision,
            recall,
            f1: f1_from(precision, recall),
            support: counts.support(Label::Positive),
        }
    }
}

/// Metrics for both classes of a binary problem
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinaryMetrics {
    pub positive: ClassMetrics,
    pub negative: ClassMetrics,
    pub accuracy: Option<f64>,
}

impl BinaryMetrics {
    /// Compute metrics from confusion counts
    pub fn from_counts(counts: &ConfusionCounts) -> Self {
        Self {
            positive: ClassMetrics::from_counts(counts),
            negative: ClassMetrics::from_counts(&counts.flipped()),
            accuracy: counts.accuracy(),
        }
    }

    /// Compute from ground truth and hard predictions
    pub fn from_labels(y_true: &[Label], y_pred: &[Label]) -> Result<Self> {
        let counts = ConfusionCounts::from_labels(y_true, y_pred)?;
        Ok(Self::from_counts(&counts))
    }

    /// Metrics of one class
    pub fn class(&self, class: Label) -> &ClassMetrics {
        match class {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Total support over both classes
    pub fn total_support(&self) -> usize {
        self.positive.support + self.negative.support
    }

    /// Averaged precision
    pub fn precision_avg(&self, average: Average) -> Option<f64> {
        self.average_metric(|m| m.precision, average)
    }

    /// Averaged recall
    pub fn recall_avg(&self, average: Average) -> Option<f64> {
        self.average_metric(|m| m.recall, average)
    }

    /// Averaged F1
    pub fn f1_avg(&self, average: Average) -> Option<f64> {
        self.average_metric(|m| m.f1, average)
    }

    fn average_metric<F>(&self, value: F, average: Average) -> Option<f64>
    where
        F: Fn(&ClassMetrics) -> Option<f64>,
    {
        let classes = [&self.positive, &self.negative];
        match average {
            Average::Macro => {
                let sum = value(classes[0])? + value(classes[1])?;
                Some(sum / 2.0)
            }
            // Pooled TP = TP + TN and pooled FP = pooled FN = FP + FN
            Average::Micro => self.accuracy,
            Average::Weighted => {
                let total = self.total_support();
                if total == 0 {
                    return None;
                }
                // A class with no support carries zero weight, even if undefined
                let mut sum = 0.0;
                for class in classes.into_iter().filter(|c| c.support > 0) {
                    sum += value(class)? * class.support as f64;
                }
                Some(sum / total as f64)
            }
        }
    }
}
