use serde::{Deserialize, Serialize};

use super::{argmax, check_finite};
use crate::error::{Error, Result};
use crate::geometry::Rectangle;

/// One detector output: a box plus its class distribution.
///
/// The raw detector vector has `C + 1` entries where the last one is the
/// "no object" class. Here that slot lives in its own field so nothing has
/// to index off the end of the class slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub rect: Rectangle,
    pub class_probabilities: Vec<f64>,
    pub background_probability: f64,
}

impl Detection {
    pub fn new(
        rect: Rectangle,
        class_probabilities: Vec<f64>,
        background_probability: f64,
    ) -> Self {
        Self {
            rect,
            class_probabilities,
            background_probability,
        }
    }

    /// Split a raw `C + 1` probability vector into class slots and background.
    ///
    /// Fails on an empty vector or any non-finite entry.
    pub fn from_raw(rect: Rectangle, mut probs: Vec<f64>) -> Result<Self> {
        check_finite(&probs, 0)?;
        let background_probability = probs.pop().ok_or_else(|| {
            Error::InvalidInput("probability vector has no background slot".to_string())
        })?;

        Ok(Self::new(rect, probs, background_probability))
    }

    /// Probability that a real object is present: `1 - background`.
    #[inline]
    pub fn objectness(&self) -> f64 {
        1.0 - self.background_probability
    }

    /// Number of semantic classes, excluding background
    pub fn num_classes(&self) -> usize {
        self.class_probabilities.len()
    }

    /// Most likely semantic class, ignoring the background slot
    pub fn predicted_class(&self) -> Option<usize> {
        argmax(&self.class_probabilities)
    }

    /// Rebuild the raw `C + 1` vector with background last.
    pub fn to_raw(&self) -> Vec<f64> {
        let mut raw = Vec::with_capacity(self.class_probabilities.len() + 1);
        raw.extend_from_slice(&self.class_probabilities);
        raw.push(self.background_probability);
        raw
    }
}
