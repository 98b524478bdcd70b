//! Error types for model training and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while loading data or a model artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model artifact not found: {0}")]
    ArtifactNotFound(PathBuf),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ModelError {
    /// Create an invalid-dataset error.
    pub fn invalid_dataset(message: impl Into<String>) -> Self {
        Self::InvalidDataset(message.into())
    }
}
