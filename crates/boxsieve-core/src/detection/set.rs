//! Flat storage for one image's detections

use super::{Detection, argmax, check_finite};
use crate::error::{Error, Result};
use crate::geometry::Rectangle;

/// Detections for a single image, kept in flat backing arrays.
///
/// Row `i` owns `rects[i]`, `backgrounds[i]` and the class slice
/// `class_probs[offsets[i]..offsets[i + 1]]`. Algorithms work on index
/// lists into these arrays instead of cloning detections around.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionSet {
    rects: Vec<Rectangle>,
    class_probs: Vec<f64>,
    offsets: Vec<usize>,
    backgrounds: Vec<f64>,
}

impl Default for DetectionSet {
    fn default() -> Self {
        Self {
            rects: Vec::new(),
            class_probs: Vec::new(),
            offsets: vec![0],
            backgrounds: Vec::new(),
        }
    }
}

impl DetectionSet {
    /// Create new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from parallel box and raw probability sequences.
    ///
    /// Each probability vector carries its background slot last. Fails when
    /// the sequences differ in length, a vector is empty, or a probability
    /// is not finite.
    pub fn from_raw<P: AsRef<[f64]>>(boxes: &[Rectangle], probs: &[P]) -> Result<Self> {
        if boxes.len() != probs.len() {
            return Err(Error::InvalidInput(format!(
                "got {} boxes but {} probability vectors",
                boxes.len(),
                probs.len()
            )));
        }

        let mut set = Self::with_capacity(boxes.len());
        for (i, (rect, raw)) in boxes.iter().zip(probs).enumerate() {
            check_finite(raw.as_ref(), i)?;
            let (background, classes) = raw.as_ref().split_last().ok_or_else(|| {
                Error::InvalidInput(format!("probability vector {} has no background slot", i))
            })?;
            set.push_row(*rect, classes, *background);
        }

        Ok(set)
    }

    /// Build from already split detections, with the same finiteness check
    pub fn from_detections(detections: &[Detection]) -> Result<Self> {
        let mut set = Self::with_capacity(detections.len());
        for (i, det) in detections.iter().enumerate() {
            check_finite(&det.class_probabilities, i)?;
            check_finite(&[det.background_probability], i)?;
            set.push_row(det.rect, &det.class_probabilities, det.background_probability);
        }
        Ok(set)
    }

    fn with_capacity(n: usize) -> Self {
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        Self {
            rects: Vec::with_capacity(n),
            class_probs: Vec::new(),
            offsets,
            backgrounds: Vec::with_capacity(n),
        }
    }

    fn push_row(&mut self, rect: Rectangle, classes: &[f64], background: f64) {
        self.rects.push(rect);
        self.class_probs.extend_from_slice(classes);
        self.offsets.push(self.class_probs.len());
        self.backgrounds.push(background);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// All rectangles, indexed like the detections
    #[inline]
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    #[inline]
    pub fn rect(&self, i: usize) -> &Rectangle {
        &self.rects[i]
    }

    #[inline]
    pub fn class_probabilities(&self, i: usize) -> &[f64] {
        &self.class_probs[self.offsets[i]..self.offsets[i + 1]]
    }

    #[inline]
    pub fn background_probability(&self, i: usize) -> f64 {
        self.backgrounds[i]
    }

    #[inline]
    pub fn objectness(&self, i: usize) -> f64 {
        1.0 - self.backgrounds[i]
    }

    pub fn predicted_class(&self, i: usize) -> Option<usize> {
        argmax(self.class_probabilities(i))
    }

    /// Owned copy of row `i`
    pub fn detection(&self, i: usize) -> Detection {
        Detection::new(
            self.rects[i],
            self.class_probabilities(i).to_vec(),
            self.backgrounds[i],
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = Detection> + '_ {
        (0..self.len()).map(|i| self.detection(i))
    }

    /// Indices by descending objectness; equal scores keep input order.
    pub fn objectness_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len()).collect();
        // sort_by is stable, which provides the tie-break
        order.sort_by(|&a, &b| self.objectness(b).total_cmp(&self.objectness(a)));
        order
    }

    /// New set holding `indices` in the given order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn project(&self, indices: &[usize]) -> Self {
        let mut out = Self::with_capacity(indices.len());
        for &i in indices {
            out.push_row(self.rects[i], self.class_probabilities(i), self.backgrounds[i]);
        }
        out
    }

    /// Keep detections whose objectness is at least `min_objectness`.
    ///
    /// This is a caller-side confidence gate. Suppression never applies it.
    pub fn filter_by_objectness(&self, min_objectness: f64) -> Self {
        let keep: Vec<usize> = (0..self.len())
            .filter(|&i| self.objectness(i) >= min_objectness)
            .collect();
        self.project(&keep)
    }

    /// Back to parallel box and raw probability vectors
    pub fn into_raw(self) -> (Vec<Rectangle>, Vec<Vec<f64>>) {
        let probs = (0..self.len())
            .map(|i| {
                let mut raw = self.class_probabilities(i).to_vec();
                raw.push(self.backgrounds[i]);
                raw
            })
            .collect();

        (self.rects, probs)
    }
}
