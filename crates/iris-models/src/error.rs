//! Error types for feature assembly and validation.

use thiserror::Error;

/// Result type for feature operations.
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Errors that can occur while assembling the classifier input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeatureError {
    /// One or more of the four required measurements is absent after
    /// resolving form fields against image-derived values.
    #[error("Missing features or image")]
    MissingFeatures,

    /// The assembled vector does not contain exactly four entries.
    #[error("Invalid number of features: expected 4, got {0}")]
    InvalidFeatureCount(usize),
}
