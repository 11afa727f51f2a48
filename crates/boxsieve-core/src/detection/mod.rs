//! Detector outputs
//!
//! A [`Detection`] is one box with its class probabilities; a
//! [`DetectionSet`] stores a whole image's worth in flat arrays.

pub mod record;
pub mod set;

pub use record::Detection;
pub use set::DetectionSet;

use crate::error::{Error, Result};

/// Probabilities must be finite; a NaN would rank above every real score.
pub(crate) fn check_finite(probs: &[f64], row: usize) -> Result<()> {
    match probs.iter().find(|p| !p.is_finite()) {
        Some(p) => Err(Error::InvalidInput(format!(
            "probability vector {} holds non-finite value {}",
            row, p
        ))),
        None => Ok(()),
    }
}

/// Index of the largest value, first index on ties, `None` when empty.
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v <= b || v.is_nan() => {}
            _ => best = Some((i, v)),
        }
    }

    best.map(|(i, _)| i)
}
