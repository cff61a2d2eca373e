//! Evaluation report structure

use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::eval::classification::{
    format_report, Average, BinaryMetrics, ClassMetrics, ConfusionCounts, Label,
};
use crate::eval::roc::RocCurve;

/// Precision, recall and F1 averaged over both classes
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AveragedMetrics {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

impl AveragedMetrics {
    fn from_metrics(metrics: &BinaryMetrics, average: Average) -> Self {
        Self {
            precision: metrics.precision_avg(average),
            recall: metrics.recall_avg(average),
            f1: metrics.f1_avg(average),
        }
    }
}

/// Everything computed by one evaluation call
///
/// `roc`, `auc` and `threshold` are present only when the report was built
/// from scores.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EvaluationReport {
    /// Report row names: negative class first, then positive
    pub class_names: [String; 2],
    /// Outcome counts at the decision threshold
    pub counts: ConfusionCounts,
    /// Overall accuracy
    pub accuracy: Option<f64>,
    /// Metrics of the negative class
    pub negative: ClassMetrics,
    /// Metrics of the positive class
    pub positive: ClassMetrics,
    /// Unweighted mean over both classes
    pub macro_avg: AveragedMetrics,
    /// Support-weighted mean over both classes
    pub weighted_avg: AveragedMetrics,
    /// Threshold used to derive predictions from scores
    pub threshold: Option<f64>,
    /// ROC curve of the scores
    pub roc: Option<RocCurve>,
    /// Area under `roc`
    pub auc: Option<f64>,
}

impl EvaluationReport {
    /// Build the prediction part of a report from confusion counts
    pub fn from_counts(counts: ConfusionCounts, class_names: [String; 2]) -> Self {
        let metrics = BinaryMetrics::from_counts(&counts);
        Self {
            class_names,
            counts,
            accuracy: metrics.accuracy,
            negative: metrics.negative,
            positive: metrics.positive,
            macro_avg: AveragedMetrics::from_metrics(&metrics, Average::Macro),
            weighted_avg: AveragedMetrics::from_metrics(&metrics, Average::Weighted),
            threshold: None,
            roc: None,
            auc: None,
        }
    }

    /// Attach the score-based part of the report
    pub fn with_roc(mut self, threshold: f64, roc: RocCurve, auc: f64) -> Self {
        self.threshold = Some(threshold);
        self.with_curve(roc, auc)
    }

    /// Attach a ROC curve and AUC to counts taken from explicit predictions
    pub fn with_curve(mut self, roc: RocCurve, auc: f64) -> Self {
        self.roc = Some(roc);
        self.auc = Some(auc);
        self
    }

    /// Per-class metrics and accuracy as one value
    pub fn metrics(&self) -> BinaryMetrics {
        BinaryMetrics {
            positive: self.positive,
            negative: self.negative,
            accuracy: self.accuracy,
        }
    }

    /// Metrics of one class
    pub fn class(&self, class: Label) -> &ClassMetrics {
        match class {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }

    /// Positive-class precision
    pub fn precision(&self) -> Option<f64> {
        self.positive.precision
    }

    /// Positive-class recall (true positive rate)
    pub fn recall(&self) -> Option<f64> {
        self.positive.recall
    }

    /// Positive-class F1
    pub fn f1(&self) -> Option<f64> {
        self.positive.f1
    }

    /// False positive rate at the decision threshold
    pub fn false_positive_rate(&self) -> Option<f64> {
        self.counts.false_positive_rate()
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [self.class_names[0].as_str(), self.class_names[1].as_str()];
        write!(f, "{}", format_report(&self.metrics(), names))?;

        writeln!(f)?;
        write!(f, "{}", self.counts)?;

        if let Some(threshold) = self.threshold {
            writeln!(f, "\nDecision threshold: {threshold}")?;
        }
        if let Some(roc) = &self.roc {
            writeln!(f, "ROC points: {}", roc.len())?;
        }
        if let Some(auc) = self.auc {
            writeln!(f, "AUC: {auc:.4}")?;
        }
        Ok(())
    }
}
