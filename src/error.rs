//! Error types with actionable diagnostics.
//!
//! Every variant describes a contract violation detected at the boundary of a
//! call. Nothing is retried and nothing is partially recovered: the caller
//! gets the error instead of a default value.

use std::path::PathBuf;
use thiserror::Error;

use crate::eval::classification::Label;

/// Result type alias for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while evaluating a classifier.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Paired sequences have different lengths.
    #[error("Shape mismatch: {labels} labels but {values} predictions/scores\n  → Pass one prediction or score per label")]
    ShapeMismatch { labels: usize, values: usize },

    /// A label or prediction is not one of the two recognized classes.
    #[error("Invalid label {value} at index {index}\n  → Labels and predictions must use the configured positive/negative values")]
    InvalidLabel { index: usize, value: i64 },

    /// Every ground-truth label belongs to the same class.
    #[error("Degenerate labels: all {count} labels are {class}\n  → ROC needs at least one positive and one negative instance")]
    DegenerateLabels { class: Label, count: usize },

    /// A score is NaN or infinite and cannot be ranked.
    #[error("Non-finite score {score} at index {index}\n  → Replace NaN/inf scores before evaluating")]
    NonFiniteScore { index: usize, score: f64 },

    /// Too few points to integrate.
    #[error("ROC curve has {points} point(s), need at least 2")]
    EmptyCurve { points: usize },

    /// False positive rate decreases between consecutive points.
    #[error("ROC curve is not sorted by false positive rate at index {index}\n  → Order points by ascending FPR (descending threshold)")]
    UnsortedCurve { index: usize },

    /// A curve point carries a rate outside [0, 1].
    #[error("ROC point at index {index} has a rate outside [0, 1]")]
    InvalidRocPoint { index: usize },

    /// Configuration or input file has invalid syntax.
    #[error("Invalid syntax in {path}:\n  {message}\n  → Check YAML/JSON syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue {
        field: String,
        message: String,
        suggestion: String,
    },

    /// Predictions file lacks the column needed for the requested command.
    #[error("Missing input: {message}\n  → Provide a \"scores\" or \"predictions\" array next to \"labels\"")]
    MissingInput { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl EvalError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if this error stems from caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Serialization { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "E001",
            Self::InvalidLabel { .. } => "E002",
            Self::DegenerateLabels { .. } => "E003",
            Self::NonFiniteScore { .. } => "E004",
            Self::EmptyCurve { .. } => "E010",
            Self::UnsortedCurve { .. } => "E011",
            Self::InvalidRocPoint { .. } => "E012",
            Self::ConfigParsing { .. } => "E020",
            Self::ConfigValue { .. } => "E021",
            Self::MissingInput { .. } => "E022",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for EvalError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_variants() -> Vec<EvalError> {
        vec![
            EvalError::ShapeMismatch { labels: 1, values: 2 },
            EvalError::InvalidLabel { index: 0, value: 7 },
            EvalError::DegenerateLabels {
                class: Label::Positive,
                count: 1,
            },
            EvalError::NonFiniteScore {
                index: 0,
                score: f64::NAN,
            },
            EvalError::EmptyCurve { points: 1 },
            EvalError::UnsortedCurve { index: 2 },
            EvalError::InvalidRocPoint { index: 0 },
            EvalError::ConfigParsing {
                path: "".into(),
                message: "".into(),
            },
            EvalError::ConfigValue {
                field: "".into(),
                message: "".into(),
                suggestion: "".into(),
            },
            EvalError::MissingInput { message: "".into() },
            EvalError::io("", std::io::Error::other("x")),
            EvalError::Serialization { message: "".into() },
        ]
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = all_variants();
        let codes: HashSet<_> = errors.iter().map(EvalError::code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|c| c.starts_with('E')));
    }

    #[test]
    fn test_shape_mismatch_reports_both_lengths() {
        let msg = EvalError::ShapeMismatch { labels: 4, values: 3 }.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_invalid_label_reports_index_and_value() {
        let msg = EvalError::InvalidLabel { index: 5, value: 2 }.to_string();
        assert!(msg.contains("index 5"));
        assert!(msg.contains("label 2"));
    }

    #[test]
    fn test_degenerate_labels_names_class() {
        let msg = EvalError::DegenerateLabels {
            class: Label::Negative,
            count: 3,
        }
        .to_string();
        assert!(msg.contains("negative"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_io_is_not_user_error() {
        let err = EvalError::io("reading input", std::io::Error::other("denied"));
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("reading input"));
        assert!(EvalError::UnsortedCurve { index: 1 }.is_user_error());
    }

    #[test]
    fn test_config_value_includes_suggestion() {
        let err = EvalError::ConfigValue {
            field: "threshold".into(),
            message: "must be finite".into(),
            suggestion: "Use a value like 0.5".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("threshold"));
        assert!(msg.contains("must be finite"));
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let json_err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let err: EvalError = json_err.into();
        assert_eq!(err.code(), "E051");
    }
}
