//! Error types for the vision pipeline.

use thiserror::Error;

/// Result type for vision operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur during feature extraction.
#[derive(Debug, Error)]
pub enum VisionError {
    /// The uploaded bytes could not be decoded as an image.
    ///
    /// Terminal for the whole request: once an image was supplied there
    /// is no fallback to form fields.
    #[error("Invalid image file: {0}")]
    InvalidImage(String),
}

impl From<image::ImageError> for VisionError {
    fn from(err: image::ImageError) -> Self {
        Self::InvalidImage(err.to_string())
    }
}
