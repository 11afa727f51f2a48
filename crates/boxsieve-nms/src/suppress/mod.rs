//! Greedy non-maximum suppression

pub mod config;
pub mod greedy;
pub mod result;

pub use config::{SuppressionConfig, SuppressionMode};
pub use greedy::{GreedySuppressor, non_maximum_suppression};
pub use result::{SuppressedDetectionSet, SuppressionStats};
