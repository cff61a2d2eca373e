//! Binary classification evaluation
//!
//! ## Architecture
//!
//! - `classification`: labels, confusion counts, per-class metrics, reports
//! - `roc`: ROC curve sweep and trapezoidal AUC
//! - `evaluator`: `ClassificationEvaluator` producing `EvaluationReport`s
//!
//! ## Example
//!
//! ```
//! use evaluar::eval::{ClassificationEvaluator, EvalConfig};
//!
//! let evaluator = ClassificationEvaluator::new(EvalConfig::default()).unwrap();
//! let report = evaluator
//!     .evaluate_scores(&[1, 1, 0, 0], &[0.9, 0.6, 0.4, 0.1])
//!     .unwrap();
//!
//! assert_eq!(report.auc, Some(1.0));
//! println!("{report}");
//! ```

pub mod classification;
pub mod evaluator;
pub mod roc;

pub use classification::{
    classification_report, confusion_counts, Average, BinaryMetrics, ClassMetrics,
    ConfusionCounts, Label, LabelEncoding,
};
pub use evaluator::{AveragedMetrics, ClassificationEvaluator, EvalConfig, EvaluationReport};
pub use roc::{auc, roc_auc_score, roc_curve, RocCurve, RocPoint};
