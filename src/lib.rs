//! facedet post-processes convolutional face-detector output into clean,
//! deduplicated, confidence-filtered bounding boxes.
//!
//! This crate provides greedy IoU non-maximum suppression, per-image and
//! batched detection filtering, and an S3FD detector facade over a pluggable
//! inference backend, with optional parallelism via the `rayon` feature.

pub mod boxes;
pub mod detector;
pub mod filter;
#[cfg(feature = "image-io")]
pub mod input;
mod suppress;
pub(crate) mod trace;
pub mod util;

pub use boxes::{BBox, BoxList};
pub use detector::sfd::{
    SfdBackend, SfdDetector, REFERENCE_SCALE, REFERENCE_X_SHIFT, REFERENCE_Y_SHIFT,
};
pub use detector::FaceDetector;
pub use filter::{DetectionFilter, DEFAULT_IOU_THRESHOLD, DEFAULT_SCORE_THRESHOLD};
pub use suppress::nms::nms;
pub use util::{FaceDetError, FaceDetResult};
