//! Receiver Operating Characteristic analysis
//!
//! - `roc_curve`: one point per distinct score, from (0, 0) to (1, 1)
//! - `auc`: trapezoidal area under an ordered curve
//! - `roc_auc_score`: both in one call
//!
//! Only the rank order of scores matters. The sweep is O(n log n).

mod auc;
mod curve;


pub use auc::{auc, roc_auc_score};
pub use curve::{roc_curve, RocCurve, RocPoint};

pub(crate) use curve::roc_curve_with;
