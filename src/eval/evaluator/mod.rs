//! Classification evaluator producing full evaluation reports
//!
//! Provides `ClassificationEvaluator` for turning labels plus hard
//! predictions or scores into an `EvaluationReport`.

mod classification_evaluator;
mod config;
mod report;

#[cfg(test)]
mod tests;

pub use classification_evaluator::ClassificationEvaluator;
pub use config::EvalConfig;
pub use report::{AveragedMetrics, EvaluationReport};
