//! S3FD detector facade: backend inference plus box filtering.

use ndarray::{ArrayView3, ArrayView4};

use crate::boxes::BoxList;
use crate::detector::FaceDetector;
use crate::filter::DetectionFilter;
use crate::util::{FaceDetError, FaceDetResult};

/// Calibration scale of S3FD boxes in the face-alignment frame.
pub const REFERENCE_SCALE: f32 = 195.0;

/// Horizontal calibration shift of S3FD boxes.
pub const REFERENCE_X_SHIFT: f32 = 0.0;

/// Vertical calibration shift of S3FD boxes.
pub const REFERENCE_Y_SHIFT: f32 = 0.0;

/// Raw S3FD inference: forward pass plus feature-map decoding.
///
/// Implementations own the network weights and device placement and return
/// every candidate box with its score, unsorted and unfiltered. The facade
/// never inspects how candidates were produced.
pub trait SfdBackend {
    /// Runs the network on one CHW image and decodes raw candidates.
    fn raw_detect(&self, image: ArrayView3<'_, f32>) -> FaceDetResult<BoxList>;

    /// Runs the network on an NCHW batch, one candidate list per image.
    ///
    /// The default maps [`raw_detect`](Self::raw_detect) over the batch axis;
    /// backends with a batched forward pass should override it.
    fn raw_detect_batch(&self, batch: ArrayView4<'_, f32>) -> FaceDetResult<Vec<BoxList>> {
        batch
            .outer_iter()
            .map(|image| self.raw_detect(image))
            .collect()
    }
}

/// S3FD face detector: a backend plus a [`DetectionFilter`].
///
/// Candidates from the backend go through NMS and a confidence cut before
/// reaching the caller. The filter thresholds are fixed at construction.
pub struct SfdDetector<B> {
    backend: B,
    filter: DetectionFilter,
}

impl<B: SfdBackend> SfdDetector<B> {
    /// Creates a detector with the reference filter thresholds.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            filter: DetectionFilter::default(),
        }
    }

    /// Replaces the detection filter.
    pub fn with_filter(mut self, filter: DetectionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The filter applied to raw candidates.
    pub fn filter(&self) -> &DetectionFilter {
        &self.filter
    }

    fn check_image_shape(shape: &[usize]) -> FaceDetResult<()> {
        if shape[0] != 3 {
            return Err(FaceDetError::ShapeMismatch {
                expected: "(3, H, W)",
                got: shape.to_vec(),
            });
        }
        Ok(())
    }

    fn check_batch_shape(shape: &[usize]) -> FaceDetResult<()> {
        if shape[1] != 3 {
            return Err(FaceDetError::ShapeMismatch {
                expected: "(N, 3, H, W)",
                got: shape.to_vec(),
            });
        }
        Ok(())
    }
}

impl<B: SfdBackend> FaceDetector for SfdDetector<B> {
    fn detect_from_image(&self, image: ArrayView3<'_, f32>) -> FaceDetResult<BoxList> {
        Self::check_image_shape(image.shape())?;

        let raw = self.backend.raw_detect(image)?;
        Ok(self.filter.filter_single(&raw))
    }

    fn detect_from_batch(&self, batch: ArrayView4<'_, f32>) -> FaceDetResult<Vec<BoxList>> {
        Self::check_batch_shape(batch.shape())?;

        let raw = self.backend.raw_detect_batch(batch)?;
        if raw.len() != batch.shape()[0] {
            return Err(FaceDetError::Backend(format!(
                "backend returned {} candidate lists for a batch of {}",
                raw.len(),
                batch.shape()[0]
            )));
        }
        Ok(self.filter.filter_batch(&raw))
    }

    fn reference_scale(&self) -> f32 {
        REFERENCE_SCALE
    }

    fn reference_x_shift(&self) -> f32 {
        REFERENCE_X_SHIFT
    }

    fn reference_y_shift(&self) -> f32 {
        REFERENCE_Y_SHIFT
    }
}
