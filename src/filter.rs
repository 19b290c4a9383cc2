//! Confidence filtering of raw detections.
//!
//! The filter turns a noisy candidate list into a clean one: non-maximum
//! suppression first, then a strict confidence cut. The batch path applies
//! the same reduction independently per image.

use crate::boxes::{BBox, BoxList};
use crate::suppress::nms::nms;
use crate::trace::{trace_event, trace_span};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Default IoU threshold used to suppress duplicate detections.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.3;

/// Default confidence threshold below which survivors are dropped.
pub const DEFAULT_SCORE_THRESHOLD: f32 = 0.5;

/// Post-processing filter for detector output.
///
/// Both thresholds are fixed at construction; the filter holds no other
/// state, so one instance can be shared across concurrent calls.
#[derive(Clone, Copy, Debug)]
pub struct DetectionFilter {
    iou_threshold: f32,
    score_threshold: f32,
}

impl Default for DetectionFilter {
    fn default() -> Self {
        Self {
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl DetectionFilter {
    /// Creates a filter with the given confidence threshold and the default
    /// IoU threshold.
    pub fn new(score_threshold: f32) -> Self {
        Self {
            score_threshold,
            ..Self::default()
        }
    }

    /// Overrides the IoU threshold used for suppression.
    pub fn with_iou_threshold(mut self, iou_threshold: f32) -> Self {
        self.iou_threshold = iou_threshold;
        self
    }

    /// Confidence threshold applied after suppression.
    pub fn score_threshold(&self) -> f32 {
        self.score_threshold
    }

    /// IoU threshold used for suppression.
    pub fn iou_threshold(&self) -> f32 {
        self.iou_threshold
    }

    /// Filters one image's candidate list.
    ///
    /// Runs NMS, reorders survivors highest score first, then retains only
    /// boxes with `score > score_threshold` (strict). Empty input returns
    /// empty output.
    pub fn filter_single(&self, boxes: &[BBox]) -> BoxList {
        if boxes.is_empty() {
            return Vec::new();
        }

        let _span = trace_span!("filter_boxes", candidates = boxes.len()).entered();

        let keep = nms(boxes, self.iou_threshold);
        let out: BoxList = keep
            .into_iter()
            .map(|idx| boxes[idx])
            .filter(|b| b.score > self.score_threshold)
            .collect();

        trace_event!("filtered_boxes", kept = out.len());
        out
    }

    /// Filters each image's candidate list independently.
    ///
    /// Output length and order match the input batch; no boxes are merged
    /// across images.
    pub fn filter_batch(&self, boxlists: &[BoxList]) -> Vec<BoxList> {
        boxlists
            .iter()
            .map(|boxes| self.filter_single(boxes))
            .collect()
    }

    /// Filters a batch with per-image parallelism (rayon).
    ///
    /// Results are identical to [`filter_batch`](Self::filter_batch); images
    /// share no state, so the batch splits freely across threads.
    #[cfg(feature = "rayon")]
    pub fn filter_batch_par(&self, boxlists: &[BoxList]) -> Vec<BoxList> {
        boxlists
            .par_iter()
            .map(|boxes| self.filter_single(boxes))
            .collect()
    }
}
