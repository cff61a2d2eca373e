//! Classification evaluator for binary models

use super::config::EvalConfig;
use super::report::EvaluationReport;
use crate::error::{EvalError, Result};
use crate::eval::classification::{ConfusionCounts, Label};
use crate::eval::roc::{roc_curve_with, RocCurve};

/// Stateless evaluator turning labels plus predictions or scores into reports
///
/// Raw integer labels are decoded with the configured encoding. Inputs are
/// only borrowed; repeated calls on the same inputs give identical output.
#[derive(Clone, Debug, Default)]
pub struct ClassificationEvaluator {
    config: EvalConfig,
}

impl ClassificationEvaluator {
    /// Create an evaluator, rejecting invalid configuration
    pub fn new(config: EvalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Decode raw labels or predictions
    pub fn decode_labels(&self, raw: &[i64]) -> Result<Vec<Label>> {
        self.config.encoding().decode(raw)
    }

    /// Confusion counts of raw labels against raw hard predictions
    pub fn confusion(&self, y_true: &[i64], y_pred: &[i64]) -> Result<ConfusionCounts> {
        check_shape(y_true.len(), y_pred.len())?;
        let y_true = self.decode_labels(y_true)?;
        let y_pred = self.decode_labels(y_pred)?;
        ConfusionCounts::from_labels(&y_true, &y_pred)
    }

    /// Evaluate hard predictions
    ///
    /// A single-class label set is not an error here; the affected rates are
    /// reported as undefined.
    pub fn evaluate_predictions(&self, y_true: &[i64], y_pred: &[i64]) -> Result<EvaluationReport> {
        let counts = self.confusion(y_true, y_pred)?;
        Ok(EvaluationReport::from_counts(
            counts,
            self.config.class_names.clone(),
        ))
    }

    /// Evaluate continuous scores
    ///
    /// Hard predictions are derived at the configured threshold; the ROC curve
    /// and AUC are added. Degenerate labels fail the whole call.
    pub fn evaluate_scores(&self, y_true: &[i64], scores: &[f64]) -> Result<EvaluationReport> {
        check_shape(y_true.len(), scores.len())?;
        let labels = self.decode_labels(y_true)?;

        let (curve, auc) = self.roc_labels(&labels, scores)?;
        let counts = ConfusionCounts::at_threshold(&labels, scores, self.config.threshold)?;

        Ok(
            EvaluationReport::from_counts(counts, self.config.class_names.clone()).with_roc(
                self.config.threshold,
                curve,
                auc,
            ),
        )
    }

    /// Evaluate hard predictions and attach the ROC curve of matching scores
    ///
    /// Counts come from `y_pred` as given, so no threshold is recorded.
    /// Predictions are checked before scores.
    pub fn evaluate_predictions_with_scores(
        &self,
        y_true: &[i64],
        y_pred: &[i64],
        scores: &[f64],
    ) -> Result<EvaluationReport> {
        let counts = self.confusion(y_true, y_pred)?;
        let (curve, auc) = self.roc(y_true, scores)?;

        Ok(EvaluationReport::from_counts(counts, self.config.class_names.clone())
            .with_curve(curve, auc))
    }

    /// ROC curve and AUC only
    pub fn roc(&self, y_true: &[i64], scores: &[f64]) -> Result<(RocCurve, f64)> {
        check_shape(y_true.len(), scores.len())?;
        let labels = self.decode_labels(y_true)?;
        self.roc_labels(&labels, scores)
    }

    fn roc_labels(&self, labels: &[Label], scores: &[f64]) -> Result<(RocCurve, f64)> {
        let curve = roc_curve_with(labels, scores, self.config.parallel_effective())?;
        let auc = curve.auc()?;
        Ok((curve, auc))
    }
}

fn check_shape(labels: usize, values: usize) -> Result<()> {
    if labels == values {
        Ok(())
    } else {
        Err(EvalError::ShapeMismatch { labels, values })
    }
}
