//! Suppression over a whole detection file

use anyhow::{Context, Result};
use boxsieve_core::{DetectionFile, DetectionSet, ImageDetections};
use boxsieve_nms::{GreedySuppressor, utils::suppress_batch};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Totals over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub images: usize,
    pub input_detections: usize,
    pub prefiltered: usize,
    pub kept_detections: usize,
}

/// Suppress every image in `input` and return the kept detections
pub fn run(config: &AppConfig, input: &DetectionFile) -> Result<(DetectionFile, RunSummary)> {
    let suppressor = GreedySuppressor::new(config.suppression.clone())?;

    let mut summary = RunSummary {
        images: input.images.len(),
        input_detections: input.total_detections(),
        ..Default::default()
    };

    let mut sets = Vec::with_capacity(input.images.len());
    for image in &input.images {
        let set = image
            .to_detection_set()
            .with_context(|| format!("Invalid detections for image '{}'", image.id))?;

        sets.push(prefilter(set, config.min_objectness, &image.id));
    }
    let remaining: usize = sets.iter().map(DetectionSet::len).sum();
    summary.prefiltered = summary.input_detections - remaining;

    let results = suppress_batch(&suppressor, &sets);

    let mut images = Vec::with_capacity(results.len());
    for (image, result) in input.images.iter().zip(results) {
        let stats = result.stats();
        info!(
            image = %image.id,
            input = image.boxes.len(),
            kept = stats.kept_count,
            suppressed = stats.suppressed_count,
            avg_objectness = stats.avg_objectness,
            "suppressed image"
        );

        summary.kept_detections += stats.kept_count;
        images.push(ImageDetections::from_detection_set(
            image.id.clone(),
            result.detections(),
        ));
    }

    Ok((DetectionFile { images }, summary))
}

fn prefilter(set: DetectionSet, min_objectness: Option<f64>, id: &str) -> DetectionSet {
    let Some(min) = min_objectness else {
        return set;
    };

    let filtered = set.filter_by_objectness(min);
    if filtered.is_empty() && !set.is_empty() {
        warn!(image = %id, min_objectness = min, "objectness gate removed every detection");
    }
    filtered
}
