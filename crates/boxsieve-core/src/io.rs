//! JSON detection files
//!
//! One file holds the raw detector output for any number of images:
//!
//! ```json
//! { "images": [ { "id": "frame-0", "boxes": [[0, 0, 4, 6]], "probs": [[0.7, 0.1, 0.2]] } ] }
//! ```
//!
//! Every probability vector keeps the background slot last.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::detection::DetectionSet;
use crate::geometry::Rectangle;

/// Raw detections for one image
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageDetections {
    pub id: String,
    pub boxes: Vec<Rectangle>,
    pub probs: Vec<Vec<f64>>,
}

impl ImageDetections {
    /// Validate and pack into a [`DetectionSet`]
    pub fn to_detection_set(&self) -> crate::Result<DetectionSet> {
        DetectionSet::from_raw(&self.boxes, &self.probs)
    }

    pub fn from_detection_set(id: impl Into<String>, set: &DetectionSet) -> Self {
        let (boxes, probs) = set.clone().into_raw();
        Self {
            id: id.into(),
            boxes,
            probs,
        }
    }
}

/// Detections for a batch of images
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DetectionFile {
    pub images: Vec<ImageDetections>,
}

impl DetectionFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read detection file: {:?}", path))?;

        let file = Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse detection file: {:?}", path))?;

        debug!(path = ?path, images = file.images.len(), "loaded detection file");
        Ok(file)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid detection JSON")
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize detections")
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write JSON to: {:?}", path))?;

        Ok(())
    }

    /// Total number of boxes across all images
    pub fn total_detections(&self) -> usize {
        self.images.iter().map(|img| img.boxes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "images": [
            {
                "id": "a",
                "boxes": [[0, 0, 4, 6], [1, 1, 2, 2]],
                "probs": [[0.7, 0.1, 0.2], [0.1, 0.1, 0.8]]
            },
            { "id": "b", "boxes": [], "probs": [] }
        ]
    }"#;

    #[test]
    fn test_parse_sample() -> Result<()> {
        let file = DetectionFile::from_json_str(SAMPLE)?;
        assert_eq!(file.images.len(), 2);
        assert_eq!(file.total_detections(), 2);

        let set = file.images[0].to_detection_set()?;
        assert_eq!(set.len(), 2);
        assert_eq!(*set.rect(0), Rectangle::new(0.0, 0.0, 4.0, 6.0));
        assert!(file.images[1].to_detection_set()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_mismatched_image_is_rejected_on_conversion() -> Result<()> {
        let file = DetectionFile::from_json_str(
            r#"{ "images": [ { "id": "x", "boxes": [[0, 0, 1, 1]], "probs": [] } ] }"#,
        )?;
        assert!(file.images[0].to_detection_set().is_err());
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Result<()> {
        let file = DetectionFile::from_json_str(SAMPLE)?;
        let path = std::env::temp_dir().join(format!("boxsieve-io-{}.json", std::process::id()));

        file.save(&path)?;
        let loaded = DetectionFile::load(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(loaded, file);
        Ok(())
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = DetectionFile::load("/nonexistent/boxsieve.json").unwrap_err();
        assert!(format!("{:#}", err).contains("boxsieve.json"));
    }
}
