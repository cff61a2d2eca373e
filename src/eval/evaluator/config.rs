//! Evaluation configuration
//!
//! Loadable from YAML:
//!
//! ```yaml
//! threshold: 0.5
//! positive_label: 1
//! negative_label: 0
//! class_names: [regular, low-calorie]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{EvalError, Result};
use crate::eval::classification::{LabelEncoding, DEFAULT_CLASS_NAMES};

/// Configuration for binary classification evaluation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Decision threshold applied to scores (`score >= threshold` is positive)
    pub threshold: f64,
    /// Raw value of the positive class
    pub positive_label: i64,
    /// Raw value of the negative class
    pub negative_label: i64,
    /// Report row names: negative class first, then positive
    pub class_names: [String; 2],
    /// Parallel score sort (requires the `parallel` feature)
    pub parallel: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            positive_label: 1,
            negative_label: 0,
            class_names: DEFAULT_CLASS_NAMES.map(String::from),
            parallel: false,
        }
    }
}

impl EvalConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            EvalError::io(format!("reading config file: {}", path.display()), e)
        })?;

        Self::from_yaml(&content, path)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| EvalError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(EvalError::ConfigValue {
                field: "threshold".into(),
                message: format!("{} is not a finite number", self.threshold),
                suggestion: "Use a value like 0.5".into(),
            });
        }
        if self.positive_label == self.negative_label {
            return Err(EvalError::ConfigValue {
                field: "positive_label".into(),
                message: format!(
                    "positive and negative labels are both {}",
                    self.positive_label
                ),
                suggestion: "Use distinct values, e.g. positive_label: 1, negative_label: 0".into(),
            });
        }
        Ok(())
    }

    /// Whether the parallel sort is requested and compiled in
    pub fn parallel_effective(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Note for a `parallel: true` that this build cannot honor
    pub fn parallel_warning(&self) -> Option<String> {
        (self.parallel && !self.parallel_effective()).then(|| {
            "parallel requested but evaluar was built without the `parallel` feature; \
             sorting sequentially"
                .to_string()
        })
    }

    /// Raw label encoding described by this config
    pub fn encoding(&self) -> LabelEncoding {
        LabelEncoding::new(self.positive_label, self.negative_label)
    }
}
