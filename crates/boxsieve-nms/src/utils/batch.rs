//! Per-image batch suppression

use boxsieve_core::DetectionSet;

use crate::suppress::SuppressedDetectionSet;
use crate::traits::NonMaxSuppression;

/// Suppress each image's detections independently.
///
/// With the `parallel` feature the images are spread over the rayon pool.
/// Calls share nothing, so no locking is involved.
pub fn suppress_batch<S>(suppressor: &S, batch: &[DetectionSet]) -> Vec<SuppressedDetectionSet>
where
    S: NonMaxSuppression + Sync,
{
    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|detections| suppressor.suppress(detections))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = batch
        .iter()
        .map(|detections| suppressor.suppress(detections))
        .collect();

    results
}
