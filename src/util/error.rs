//! Error types for facedet.

use thiserror::Error;

/// Result alias for facedet operations.
pub type FaceDetResult<T> = std::result::Result<T, FaceDetError>;

/// Errors that can occur when running the detection pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum FaceDetError {
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// An input tensor has the wrong shape for the detector.
    #[error("shape mismatch: expected {expected}, got {got:?}")]
    ShapeMismatch {
        /// Human-readable description of the expected layout.
        expected: &'static str,
        /// Actual dimensions of the offending tensor.
        got: Vec<usize>,
    },
    /// The inference backend failed while producing raw candidates.
    #[error("backend error: {0}")]
    Backend(String),
}
