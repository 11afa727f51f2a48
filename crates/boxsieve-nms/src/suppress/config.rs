//! Suppression configuration

use anyhow::Context;
use boxsieve_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which detections are allowed to suppress each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuppressionMode {
    /// Any box may suppress any other, ranked by objectness alone
    #[default]
    Joint,
    /// Only boxes sharing a predicted class compete
    PerClass,
}

/// Main suppression configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuppressionConfig {
    /// Candidates whose IoU with a kept box is strictly above this are dropped
    pub iou_threshold: f64,
    pub mode: SuppressionMode,
    /// Cap on kept detections, applied after suppression
    pub max_detections: Option<usize>,
}

impl Default for SuppressionConfig {
    fn default() -> Self {
        Self {
            iou_threshold: 0.5,
            mode: SuppressionMode::Joint,
            max_detections: None,
        }
    }
}

impl SuppressionConfig {
    /// Class-agnostic suppression
    pub fn joint(iou_threshold: f64) -> Self {
        Self {
            iou_threshold,
            mode: SuppressionMode::Joint,
            ..Default::default()
        }
    }

    /// Suppression within each predicted class
    pub fn per_class(iou_threshold: f64) -> Self {
        Self {
            iou_threshold,
            mode: SuppressionMode::PerClass,
            ..Default::default()
        }
    }

    pub fn with_max_detections(mut self, max_detections: usize) -> Self {
        self.max_detections = Some(max_detections);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_iou_threshold(self.iou_threshold)
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read suppression config: {:?}", path))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse suppression config: {:?}", path))?;

        config.validate()?;
        Ok(config)
    }
}

/// Thresholds must lie in `(0, 1]`; NaN is rejected.
pub fn validate_iou_threshold(iou_threshold: f64) -> Result<()> {
    if iou_threshold > 0.0 && iou_threshold <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "iou_threshold must lie in (0, 1], got {}",
            iou_threshold
        )))
    }
}
