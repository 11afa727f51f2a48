//! Boxsieve non-maximum suppression
//!
//! Greedy IoU-based filtering of detector output, either across all classes
//! at once or independently per predicted class.

pub mod overlap;
pub mod suppress;
pub mod utils;

// Re-export commonly used types
pub use overlap::{batch_iou, batch_iou_indexed};
pub use suppress::{
    GreedySuppressor, SuppressedDetectionSet, SuppressionConfig, SuppressionMode,
    SuppressionStats, non_maximum_suppression,
};
pub use traits::NonMaxSuppression;

pub use boxsieve_core::{Detection, DetectionSet, Error, Rectangle, Result};

/// Core traits for the suppression crate
pub mod traits {
    use super::*;

    /// Trait for non-maximum suppression implementations
    pub trait NonMaxSuppression {
        fn suppress(&self, detections: &DetectionSet) -> SuppressedDetectionSet;
    }
}
