//! Averaging strategies across the two classes

/// Averaging strategy for per-class metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Average {
    /// Unweighted mean of the two per-class values
    Macro,
    /// Metrics computed from pooled counts; equals accuracy for binary input
    Micro,
    /// Mean weighted by support (number of true instances per class)
    Weighted,
}
