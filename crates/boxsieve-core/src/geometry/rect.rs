//! Axis-aligned rectangles in `(left, top, right, bottom)` form

use serde::{Deserialize, Serialize};

/// Axis-aligned box in a shared 2D frame.
///
/// Callers are expected to keep `left <= right` and `top <= bottom`. An
/// inverted rectangle is not rejected, its width and height clip to zero
/// so it simply has no area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    /// Create a rectangle from its four edges
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create from a top-left corner plus width and height
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.right - self.left).max(0.0)
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center point as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Area shared with `other`; zero when the boxes do not touch.
    pub fn intersection_area(&self, other: &Rectangle) -> f64 {
        let width = (self.right.min(other.right) - self.left.max(other.left)).max(0.0);
        let height = (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0);

        width * height
    }

    /// Intersection over union with another rectangle.
    ///
    /// Always in `[0, 1]`. Two degenerate boxes have an empty union and
    /// yield `0.0` instead of dividing by zero.
    pub fn iou(&self, other: &Rectangle) -> f64 {
        let intersection = self.intersection_area(other);
        let union = self.area() + other.area() - intersection;

        if union.is_finite() {
            return if union > 0.0 {
                (intersection / union).min(1.0)
            } else {
                0.0
            };
        }

        // Areas overflowed: IoU is scale invariant, so retry in a unit frame
        let scale = self.max_abs_coordinate().max(other.max_abs_coordinate());
        if scale.is_finite() && scale > 0.0 {
            self.scaled(scale.recip()).iou(&other.scaled(scale.recip()))
        } else {
            0.0
        }
    }

    fn max_abs_coordinate(&self) -> f64 {
        self.to_array().iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
    }

    fn scaled(&self, factor: f64) -> Rectangle {
        Rectangle::new(
            self.left * factor,
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }
}

impl From<[f64; 4]> for Rectangle {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Rectangle> for [f64; 4] {
    fn from(r: Rectangle) -> Self {
        r.to_array()
    }
}

impl From<(f64, f64, f64, f64)> for Rectangle {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Self::new(left, top, right, bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_area_and_dimensions() {
        let r = Rectangle::new(0.0, 0.0, 4.0, 6.0);
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 6.0);
        assert_eq!(r.area(), 24.0);
        assert_eq!(r.center(), (2.0, 3.0));
    }

    #[test]
    fn test_inverted_rectangle_has_no_area() {
        let r = Rectangle::new(4.0, 0.0, 0.0, 6.0);
        assert_eq!(r.area(), 0.0);
    }

    #[test]
    fn test_from_ltwh() {
        let r = Rectangle::from_ltwh(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r, Rectangle::new(1.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn test_iou_partial_overlap() {
        let a = Rectangle::new(0.0, 0.0, 4.0, 6.0);
        let b = Rectangle::new(-2.0, -2.0, 2.0, 2.0);
        assert!((a.iou(&b) - 1.0 / 9.0).abs() < EPS);
        assert!((b.iou(&a) - 1.0 / 9.0).abs() < EPS);
    }

    #[test]
    fn test_iou_touching_edges_is_zero() {
        let a = Rectangle::new(0.0, 0.0, 4.0, 6.0);
        let b = Rectangle::new(-4.0, -4.0, 0.0, 0.0);
        assert_eq!(a.intersection_area(&b), 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_degenerate_boxes() {
        let point = Rectangle::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(point.iou(&point), 0.0);

        let line = Rectangle::new(0.0, 0.0, 5.0, 0.0);
        let square = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(line.iou(&square), 0.0);
    }

    #[test]
    fn test_iou_self_is_one() {
        let r = Rectangle::new(0.5, 0.25, 3.75, 9.0);
        assert!((r.iou(&r) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_iou_huge_coordinates() {
        let a = Rectangle::new(0.0, 0.0, 1e200, 1e200);
        assert!(a.area().is_infinite());
        assert!((a.iou(&a) - 1.0).abs() < EPS);

        let half = Rectangle::new(0.0, 0.0, 1e200, 5e199);
        assert!((a.iou(&half) - 0.5).abs() < EPS);
        assert_eq!(a.iou(&half), half.iou(&a));

        let wide = Rectangle::new(-1e308, -1e308, 1e308, 1e308);
        assert!((wide.iou(&wide) - 1.0).abs() < EPS);

        let far = Rectangle::new(2e200, 2e200, 3e200, 3e200);
        assert_eq!(a.iou(&far), 0.0);
    }

    #[test]
    fn test_serde_as_array() {
        let r = Rectangle::new(0.0, 1.0, 2.0, 3.0);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, "[0.0,1.0,2.0,3.0]");

        let back: Rectangle = serde_json::from_str("[0,1,2,3]").unwrap();
        assert_eq!(back, r);
    }
}
