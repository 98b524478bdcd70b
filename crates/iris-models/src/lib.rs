//! Shared data models for the iris prediction service.
//!
//! This crate provides Serde-serializable types for:
//! - The ordered feature vector consumed by the classifier
//! - Scalar form inputs and their resolution against image-derived features
//! - Prediction responses
//! - Typed feature-validation errors

pub mod error;
pub mod features;
pub mod prediction;

// Re-export common types
pub use error::{FeatureError, FeatureResult};
pub use features::{FeatureVector, ScalarInputs, FEATURE_COUNT, FEATURE_NAMES};
pub use prediction::PredictionResult;
