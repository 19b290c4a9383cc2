//! Non-maximum suppression over scored bounding boxes.

use crate::boxes::BBox;

/// Applies greedy IoU non-maximum suppression.
///
/// Returns indices into `boxes` of the survivors, highest score first. Boxes
/// need not be pre-sorted. Candidates are processed from the highest score
/// down; each kept box removes every remaining candidate whose IoU with it
/// exceeds `iou_threshold`. Equal scores resolve to the later input index
/// first, matching a stable ascending argsort consumed from the back.
pub fn nms(boxes: &[BBox], iou_threshold: f32) -> Vec<usize> {
    if boxes.is_empty() {
        return Vec::new();
    }

    let areas: Vec<f32> = boxes.iter().map(BBox::pixel_area).collect();

    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by(|&a, &b| {
        boxes[a]
            .score
            .total_cmp(&boxes[b].score)
            .then_with(|| a.cmp(&b))
    });

    let mut keep = Vec::new();
    while let Some(top) = order.pop() {
        keep.push(top);
        order.retain(|&other| {
            let inter = boxes[top].intersection_area(&boxes[other]);
            let union = areas[top] + areas[other] - inter;
            // Zero union means two degenerate disjoint boxes; keep them.
            let overlap = if union <= f32::EPSILON { 0.0 } else { inter / union };
            overlap <= iou_threshold
        });
    }

    keep
}
