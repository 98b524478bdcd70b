//! Image-to-feature extraction for the iris prediction service.
//!
//! Derives the four flower measurements from an uploaded photo using
//! classical heuristics: fixed HSV color thresholds isolate petal-like
//! and sepal-like pixels, the largest connected region of each mask is
//! measured via its axis-aligned bounding box, and pixel extents are
//! scaled to centimeters by a fixed conversion factor.
//!
//! The pipeline is pure and synchronous over request-local buffers; it
//! holds no state across calls.

pub mod color;
pub mod config;
pub mod convert;
pub mod error;
pub mod measure;
pub mod pipeline;
pub mod region;
pub mod segment;

// Re-export common types
pub use color::{Hsv, HsvRange};
pub use config::ExtractionConfig;
pub use error::{VisionError, VisionResult};
pub use measure::PixelMeasurement;
pub use pipeline::extract_features;
pub use region::{BoundingBox, Region};
