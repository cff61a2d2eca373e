//! Binary class labels and their raw encoding

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvalError, Result};

/// One of the two classes of a binary problem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Whether this is the positive class
    pub fn is_positive(self) -> bool {
        self == Label::Positive
    }

    /// The other class
    pub fn opposite(self) -> Self {
        match self {
            Label::Positive => Label::Negative,
            Label::Negative => Label::Positive,
        }
    }

    /// Classify a score against a decision threshold (`score >= threshold` is positive)
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl From<bool> for Label {
    fn from(positive: bool) -> Self {
        if positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => write!(f, "positive"),
            Label::Negative => write!(f, "negative"),
        }
    }
}

/// Mapping from raw integer class values to [`Label`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelEncoding {
    /// Raw value of the positive class
    pub positive: i64,
    /// Raw value of the negative class
    pub negative: i64,
}

impl Default for LabelEncoding {
    fn default() -> Self {
        Self {
            positive: 1,
            negative: 0,
        }
    }
}

impl LabelEncoding {
    /// Create an encoding with explicit positive and negative values
    pub fn new(positive: i64, negative: i64) -> Self {
        Self { positive, negative }
    }

    /// Decode a single raw value found at `index`
    pub fn decode_one(&self, index: usize, value: i64) -> Result<Label> {
        if value == self.positive {
            Ok(Label::Positive)
        } else if value == self.negative {
            Ok(Label::Negative)
        } else {
            Err(EvalError::InvalidLabel { index, value })
        }
    }

    /// Decode a raw sequence, failing on the first value outside the two classes
    pub fn decode(&self, raw: &[i64]) -> Result<Vec<Label>> {
        raw.iter()
            .enumerate()
            .map(|(i, &v)| self.decode_one(i, v))
            .collect()
    }

    /// Encode a label back to its raw value
    pub fn encode(&self, label: Label) -> i64 {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
        }
    }
}
