//! Gender label encoding.
//!
//! The encoder is trained together with the regression model: a label's code is
//! its index in the sorted class list, so the two artifacts must always be
//! regenerated as a pair.

use serde::{Deserialize, Serialize};

/// Closed set of string labels mapped to integer codes.
pub trait CategoricalEncoder: Send + Sync {
    /// Known labels in code order.
    fn classes(&self) -> &[String];

    /// Code for `label`, or `None` when the label was never seen in training.
    fn encode(&self, label: &str) -> Option<usize>;
}

/// Persisted encoder for the gender field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderEncoder {
    classes: Vec<String>,
}

impl GenderEncoder {
    /// Builds an encoder from the labels seen in a training set. Labels are
    /// sorted and de-duplicated.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Reverse lookup of a code.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Number of known labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no label is known, which a loaded encoder never is.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Non-empty, strictly sorted classes. Anything else did not come out of
    /// [`GenderEncoder::from_labels`].
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.classes.is_empty() && self.classes.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl CategoricalEncoder for GenderEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn encode(&self, label: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(label))
            .ok()
    }
}
