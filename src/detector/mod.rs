//! Detector facades and the seams they are built on.
//!
//! [`FaceDetector`] is the capability consumed by downstream alignment code;
//! the S3FD variant lives in `sfd`. Other variants (different backbones,
//! landmark-only detectors) implement the same trait.

pub(crate) mod sfd;

use ndarray::{ArrayView3, ArrayView4};

use crate::boxes::BoxList;
use crate::util::FaceDetResult;

/// A face detector producing scored boxes in image-pixel coordinates.
///
/// Images are CHW `f32` tensors already normalized for the concrete model;
/// batches are NCHW. Besides detection, an implementation exposes three fixed
/// calibration constants mapping its boxes onto the normalized face-alignment
/// frame. They are read-only properties of the model, not computed per call.
pub trait FaceDetector {
    /// Detects faces in a single image.
    fn detect_from_image(&self, image: ArrayView3<'_, f32>) -> FaceDetResult<BoxList>;

    /// Detects faces in a batch of images, one output list per input image,
    /// in input order.
    fn detect_from_batch(&self, batch: ArrayView4<'_, f32>) -> FaceDetResult<Vec<BoxList>>;

    /// Calibration scale of the detector's boxes.
    fn reference_scale(&self) -> f32;

    /// Horizontal calibration shift of the detector's boxes.
    fn reference_x_shift(&self) -> f32;

    /// Vertical calibration shift of the detector's boxes.
    fn reference_y_shift(&self) -> f32;
}
