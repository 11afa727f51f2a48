//! Suppression output and statistics

use boxsieve_core::{DetectionSet, Rectangle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Detections that survived suppression, by descending objectness.
#[derive(Debug, Clone, PartialEq)]
pub struct SuppressedDetectionSet {
    detections: DetectionSet,
    kept_indices: Vec<usize>,
    input_len: usize,
}

impl SuppressedDetectionSet {
    pub(crate) fn new(
        detections: DetectionSet,
        kept_indices: Vec<usize>,
        input_len: usize,
    ) -> Self {
        Self {
            detections,
            kept_indices,
            input_len,
        }
    }

    pub fn detections(&self) -> &DetectionSet {
        &self.detections
    }

    /// Positions of the kept detections in the input set
    pub fn kept_indices(&self) -> &[usize] {
        &self.kept_indices
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn suppressed_count(&self) -> usize {
        self.input_len - self.detections.len()
    }

    pub fn into_detection_set(self) -> DetectionSet {
        self.detections
    }

    /// Kept boxes and raw probability vectors
    pub fn into_raw(self) -> (Vec<Rectangle>, Vec<Vec<f64>>) {
        self.detections.into_raw()
    }

    /// Get statistics
    pub fn stats(&self) -> SuppressionStats {
        let mut class_counts: BTreeMap<usize, usize> = BTreeMap::new();
        let mut total_objectness = 0.0;
        let mut max_objectness = f64::NEG_INFINITY;
        let mut min_objectness = f64::INFINITY;

        for i in 0..self.detections.len() {
            if let Some(class) = self.detections.predicted_class(i) {
                *class_counts.entry(class).or_insert(0) += 1;
            }

            let objectness = self.detections.objectness(i);
            total_objectness += objectness;
            max_objectness = max_objectness.max(objectness);
            min_objectness = min_objectness.min(objectness);
        }

        let (avg_objectness, max_objectness, min_objectness) = if self.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                total_objectness / self.len() as f64,
                max_objectness,
                min_objectness,
            )
        };

        SuppressionStats {
            input_count: self.input_len,
            kept_count: self.len(),
            suppressed_count: self.suppressed_count(),
            class_counts,
            avg_objectness,
            max_objectness,
            min_objectness,
        }
    }
}

/// Statistics about one suppression call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuppressionStats {
    pub input_count: usize,
    pub kept_count: usize,
    pub suppressed_count: usize,
    /// Kept detections per predicted class
    pub class_counts: BTreeMap<usize, usize>,
    pub avg_objectness: f64,
    pub max_objectness: f64,
    pub min_objectness: f64,
}
