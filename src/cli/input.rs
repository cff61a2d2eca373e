//! Predictions file loading
//!
//! ```json
//! {"labels": [1, 0, 1], "scores": [0.9, 0.2, 0.4], "predictions": [1, 0, 0]}
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{EvalError, Result};

/// Ground-truth labels with scores and/or hard predictions
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionSet {
    /// Raw ground-truth labels
    pub labels: Vec<i64>,
    /// Continuous classifier scores
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
    /// Raw hard predictions
    #[serde(default)]
    pub predictions: Option<Vec<i64>>,
}

impl PredictionSet {
    /// Load a predictions file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EvalError::io(format!("reading predictions file: {}", path.display()), e)
        })?;

        Self::from_json(&content, path)
    }

    /// Parse a predictions document, requiring scores or predictions
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let set: Self = serde_json::from_str(content).map_err(|e| EvalError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if set.scores.is_none() && set.predictions.is_none() {
            return Err(EvalError::MissingInput {
                message: format!("{} has labels only", path.display()),
            });
        }
        Ok(set)
    }

    /// Scores, or `MissingInput` when the file only has hard predictions
    pub fn require_scores(&self) -> Result<&[f64]> {
        self.scores
            .as_deref()
            .ok_or_else(|| EvalError::MissingInput {
                message: "ROC needs a \"scores\" array".into(),
            })
    }

    /// Hard predictions, or `MissingInput` when the file only has scores
    pub fn require_predictions(&self) -> Result<&[i64]> {
        self.predictions
            .as_deref()
            .ok_or_else(|| EvalError::MissingInput {
                message: "no \"predictions\" array".into(),
            })
    }

    /// Number of labeled instances
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when there are no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(json: &str) -> Result<PredictionSet> {
        PredictionSet::from_json(json, Path::new("preds.json"))
    }

    #[test]
    fn test_parse_scores() {
        let set = parse(r#"{"labels": [1, 0], "scores": [0.7, 0.1]}"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.require_scores().unwrap(), &[0.7, 0.1]);
        assert!(set.require_predictions().is_err());
    }

    #[test]
    fn test_parse_predictions_only() {
        let set = parse(r#"{"labels": [1, 0], "predictions": [1, 1]}"#).unwrap();
        assert_eq!(set.predictions, Some(vec![1, 1]));
        assert!(matches!(
            set.require_scores(),
            Err(EvalError::MissingInput { .. })
        ));
    }

    #[test]
    fn test_labels_only_is_missing_input() {
        let err = parse(r#"{"labels": [1, 0]}"#).unwrap_err();
        assert!(matches!(err, EvalError::MissingInput { .. }));
        assert_eq!(err.code(), "E022");
    }

    #[test]
    fn test_malformed_json() {
        let err = parse(r#"{"labels": [1, 0"#).unwrap_err();
        assert!(matches!(err, EvalError::ConfigParsing { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse(r#"{"labels": [1], "score": [0.1]}"#).unwrap_err();
        assert!(matches!(err, EvalError::ConfigParsing { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"labels": [0], "predictions": [0]}}"#).unwrap();

        let set = PredictionSet::from_file(file.path()).unwrap();
        assert!(!set.is_empty());
    }

    #[test]
    fn test_from_missing_file() {
        let err = PredictionSet::from_file("/nonexistent/preds.json").unwrap_err();
        assert!(!err.is_user_error());
    }
}
