//! Classification metrics for binary model evaluation
//!
//! Provides:
//! - Binary labels and raw label decoding
//! - Confusion counts (TP, FP, TN, FN)
//! - Per-class precision, recall, F1 and support
//! - Macro, micro, and weighted averaging
//! - sklearn-style classification reports
//!
//! Rates whose denominator is zero are `None`, never a silent 0.

mod average;
mod confusion;
mod label;
mod metrics;
mod report;


pub use average::Average;
pub use confusion::ConfusionCounts;
pub use label::{Label, LabelEncoding};
pub use metrics::{BinaryMetrics, ClassMetrics};
pub use report::{classification_report, confusion_counts, DEFAULT_CLASS_NAMES};

pub(crate) use report::format_report;
