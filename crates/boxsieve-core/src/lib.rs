//! Boxsieve core data model
//!
//! Axis-aligned rectangles, detector outputs and the flat detection arena
//! consumed by the suppression crate.

pub mod detection;
pub mod error;
pub mod geometry;
pub mod io;

// Re-export commonly used types
pub use detection::{Detection, DetectionSet};
pub use error::{Error, Result};
pub use geometry::Rectangle;
pub use io::{DetectionFile, ImageDetections};
