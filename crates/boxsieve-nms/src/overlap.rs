//! Box-overlap evaluation

use boxsieve_core::Rectangle;

/// IoU between `reference` and every candidate, in candidate order.
///
/// Zero-area boxes are allowed. A pair whose union is empty scores `0.0`.
pub fn batch_iou(reference: &Rectangle, candidates: &[Rectangle]) -> Vec<f64> {
    candidates.iter().map(|c| reference.iou(c)).collect()
}

/// Same as [`batch_iou`] for the rows `indices` of an arena of rectangles.
pub fn batch_iou_indexed(
    reference: &Rectangle,
    rects: &[Rectangle],
    indices: &[usize],
) -> Vec<f64> {
    indices.iter().map(|&i| reference.iou(&rects[i])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: f64, t: f64, rt: f64, b: f64) -> Rectangle {
        Rectangle::new(l, t, rt, b)
    }

    #[test]
    fn test_batch_iou_fixture() {
        let reference = r(0.0, 0.0, 4.0, 6.0);
        let candidates = [
            r(0.0, 0.0, 4.0, 4.0),
            r(-2.0, -2.0, 2.0, 2.0),
            r(-4.0, -4.0, 0.0, 0.0),
            r(-6.0, -6.0, -2.0, -2.0),
        ];
        let expected = [2.0 / 3.0, 1.0 / 9.0, 0.0, 0.0];

        let ious = batch_iou(&reference, &candidates);
        assert_eq!(ious.len(), expected.len());
        for (got, want) in ious.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn test_batch_iou_empty_candidates() {
        assert!(batch_iou(&r(0.0, 0.0, 1.0, 1.0), &[]).is_empty());
    }

    #[test]
    fn test_batch_iou_degenerate_reference() {
        let point = r(2.0, 2.0, 2.0, 2.0);
        let ious = batch_iou(&point, &[point, r(0.0, 0.0, 4.0, 4.0)]);
        assert_eq!(ious, vec![0.0, 0.0]);
    }

    #[test]
    fn test_indexed_matches_plain() {
        let rects = [r(0.0, 0.0, 4.0, 4.0), r(1.0, 1.0, 5.0, 5.0), r(9.0, 9.0, 10.0, 10.0)];
        let reference = r(0.0, 0.0, 4.0, 6.0);

        let indexed = batch_iou_indexed(&reference, &rects, &[2, 0]);
        let plain = batch_iou(&reference, &[rects[2], rects[0]]);
        assert_eq!(indexed, plain);
    }
}
