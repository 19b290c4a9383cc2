//! Scored axis-aligned bounding boxes and the overlap math used to prune them.
//!
//! Coordinates follow the detector's discrete-pixel convention: a box covers
//! the inclusive pixel range `[x1, x2] x [y1, y2]`, so widths carry a `+1`.

/// Scored detection box in image-pixel coordinates.
///
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right corner and
/// `score` a confidence in `[0, 1]`. The corner ordering is not enforced;
/// degenerate boxes pass through the overlap math and yield zero overlap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    /// Left edge (column) of the box.
    pub x1: f32,
    /// Top edge (row) of the box.
    pub y1: f32,
    /// Right edge (column) of the box.
    pub x2: f32,
    /// Bottom edge (row) of the box.
    pub y2: f32,
    /// Detection confidence.
    pub score: f32,
}

impl BBox {
    /// Creates a box from corner coordinates and a confidence score.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Self {
        Self { x1, y1, x2, y2, score }
    }

    /// Box area under the inclusive-pixel convention.
    pub fn pixel_area(&self) -> f32 {
        (self.x2 - self.x1 + 1.0) * (self.y2 - self.y1 + 1.0)
    }

    /// Area of the intersection rectangle with `other`, clamped to zero for
    /// disjoint boxes.
    pub fn intersection_area(&self, other: &BBox) -> f32 {
        let ix1 = self.x1.max(other.x1);
        let iy1 = self.y1.max(other.y1);
        let ix2 = self.x2.min(other.x2);
        let iy2 = self.y2.min(other.y2);

        let width = (ix2 - ix1 + 1.0).max(0.0);
        let height = (iy2 - iy1 + 1.0).max(0.0);
        width * height
    }

    /// Intersection-over-union with `other`.
    ///
    /// A zero union (both boxes degenerate and disjoint) is treated as zero
    /// overlap rather than a division fault.
    pub fn iou(&self, other: &BBox) -> f32 {
        let inter = self.intersection_area(other);
        let union = self.pixel_area() + other.pixel_area() - inter;
        if union <= f32::EPSILON {
            return 0.0;
        }
        inter / union
    }
}

/// Ordered collection of scored boxes for one image.
pub type BoxList = Vec<BBox>;

#[cfg(test)]
mod tests {
    use super::BBox;

    #[test]
    fn pixel_area_counts_inclusive_pixels() {
        let b = BBox::new(0.0, 0.0, 9.0, 9.0, 1.0);
        assert_eq!(b.pixel_area(), 100.0);

        let unit = BBox::new(3.0, 4.0, 3.0, 4.0, 1.0);
        assert_eq!(unit.pixel_area(), 1.0);
    }

    #[test]
    fn intersection_of_disjoint_boxes_is_zero() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0, 0.9);
        let b = BBox::new(50.0, 50.0, 60.0, 60.0, 0.8);
        assert_eq!(a.intersection_area(&b), 0.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_of_identical_boxes_is_one() {
        let a = BBox::new(2.0, 3.0, 12.0, 13.0, 0.7);
        assert!((a.iou(&a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn iou_guards_zero_union() {
        // Inverted corners give a negative pixel area; the union of two such
        // boxes can reach zero and must not divide by it.
        let a = BBox::new(10.0, 10.0, 8.0, 10.0, 0.5);
        let b = BBox::new(20.0, 20.0, 18.0, 20.0, 0.5);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn iou_matches_hand_computed_overlap() {
        // 11x11-pixel boxes offset by one pixel overlap on a 10x10 region.
        let a = BBox::new(0.0, 0.0, 10.0, 10.0, 0.9);
        let b = BBox::new(1.0, 1.0, 11.0, 11.0, 0.8);
        let inter = a.intersection_area(&b);
        assert_eq!(inter, 100.0);
        let expected = 100.0 / (121.0 + 121.0 - 100.0);
        assert!((a.iou(&b) - expected).abs() < 1e-6);
    }
}
