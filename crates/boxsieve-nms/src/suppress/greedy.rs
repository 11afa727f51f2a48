//! Greedy suppressor

use boxsieve_core::{DetectionSet, Rectangle, Result};
use std::collections::HashMap;
use tracing::debug;

use super::config::{SuppressionConfig, SuppressionMode, validate_iou_threshold};
use super::result::SuppressedDetectionSet;
use crate::overlap::batch_iou_indexed;
use crate::traits::NonMaxSuppression;

/// Greedy single-pass NMS over a [`DetectionSet`].
///
/// The highest-objectness remaining box is kept and every remaining box
/// overlapping it by more than the IoU threshold is dropped, until nothing
/// remains. An IoU exactly equal to the threshold survives.
#[derive(Debug, Clone)]
pub struct GreedySuppressor {
    config: SuppressionConfig,
}

impl GreedySuppressor {
    /// Create new suppressor, rejecting an out-of-range threshold
    pub fn new(config: SuppressionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SuppressionConfig {
        &self.config
    }

    /// Indices of the kept detections, by descending objectness.
    pub fn keep_indices(&self, detections: &DetectionSet) -> Vec<usize> {
        let order = detections.objectness_order();
        let threshold = self.config.iou_threshold;

        let mut kept = match self.config.mode {
            SuppressionMode::Joint => greedy_keep(detections.rects(), &order, threshold),
            SuppressionMode::PerClass => per_class_keep(detections, &order, threshold),
        };

        if let Some(max) = self.config.max_detections {
            kept.truncate(max);
        }

        debug!(
            mode = ?self.config.mode,
            input = detections.len(),
            kept = kept.len(),
            "non-maximum suppression"
        );

        kept
    }
}

impl NonMaxSuppression for GreedySuppressor {
    fn suppress(&self, detections: &DetectionSet) -> SuppressedDetectionSet {
        let kept = self.keep_indices(detections);
        SuppressedDetectionSet::new(detections.project(&kept), kept, detections.len())
    }
}

/// Run NMS over `order`, which must already be sorted by descending score.
fn greedy_keep(rects: &[Rectangle], order: &[usize], iou_threshold: f64) -> Vec<usize> {
    let mut remaining = order.to_vec();
    let mut kept = Vec::new();

    while let Some((&current, rest)) = remaining.split_first() {
        kept.push(current);

        let overlaps = batch_iou_indexed(&rects[current], rects, rest);
        remaining = rest
            .iter()
            .zip(overlaps)
            .filter(|&(_, iou)| iou <= iou_threshold)
            .map(|(&i, _)| i)
            .collect();
    }

    kept
}

/// Suppress within each predicted class, then merge back in global order.
fn per_class_keep(detections: &DetectionSet, order: &[usize], iou_threshold: f64) -> Vec<usize> {
    let mut class_groups: HashMap<Option<usize>, Vec<usize>> = HashMap::new();

    // Group by class, preserving the sorted order inside each group
    for &i in order {
        class_groups
            .entry(detections.predicted_class(i))
            .or_default()
            .push(i);
    }

    let mut keep = vec![false; detections.len()];
    for indices in class_groups.values() {
        for i in greedy_keep(detections.rects(), indices, iou_threshold) {
            keep[i] = true;
        }
    }

    order.iter().copied().filter(|&i| keep[i]).collect()
}

/// Class-agnostic NMS on parallel box and raw probability sequences.
///
/// Each probability vector ends with the background slot; objectness is
/// `1 - background`. Returns the kept boxes and vectors by descending
/// objectness. Fails on mismatched lengths, an empty probability vector,
/// or a threshold outside `(0, 1]`.
pub fn non_maximum_suppression<P: AsRef<[f64]>>(
    boxes: &[Rectangle],
    probs: &[P],
    iou_threshold: f64,
) -> Result<(Vec<Rectangle>, Vec<Vec<f64>>)> {
    validate_iou_threshold(iou_threshold)?;

    let detections = DetectionSet::from_raw(boxes, probs)?;
    let suppressor = GreedySuppressor::new(SuppressionConfig::joint(iou_threshold))?;

    Ok(suppressor.suppress(&detections).into_raw())
}
