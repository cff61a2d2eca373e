//! # Evaluar
//!
//! Binary classification evaluation: confusion counts, precision, recall,
//! F1, ROC curves and trapezoidal AUC.
//!
//! Undefined rates (zero denominators) are `None` rather than a silent 0,
//! and every contract violation is reported through [`EvalError`].
//!
//! ```
//! use evaluar::{roc_auc_score, ConfusionCounts, Label};
//!
//! let y_true = [Label::Positive, Label::Positive, Label::Negative, Label::Negative];
//! let y_pred = [Label::Positive, Label::Negative, Label::Negative, Label::Negative];
//!
//! let counts = ConfusionCounts::from_labels(&y_true, &y_pred).unwrap();
//! assert_eq!(counts.precision(), Some(1.0));
//! assert_eq!(counts.recall(), Some(0.5));
//!
//! let auc = roc_auc_score(&y_true, &[0.9, 0.6, 0.4, 0.1]).unwrap();
//! assert_eq!(auc, 1.0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;

pub use error::{EvalError, Result};
pub use eval::{
    auc, roc_auc_score, roc_curve, ClassificationEvaluator, ConfusionCounts, EvalConfig,
    EvaluationReport, Label, RocCurve, RocPoint,
};
