//! Extraction pipeline configuration.
//!
//! The color thresholds are crude heuristics tied to a specific color
//! scheme (violet petals, yellow-green sepals). They live here as named
//! constants so they can be recalibrated without touching pipeline logic.

use serde::{Deserialize, Serialize};

use crate::color::{Hsv, HsvRange};

/// Side length images are resized to before segmentation. Fixing the
/// resolution keeps the pixel-based heuristics scale-independent.
pub const CANONICAL_SIZE: u32 = 600;

/// Broad purple/violet hue band with mid-to-high saturation and value.
pub const PETAL_RANGE: HsvRange = HsvRange::new(Hsv::new(120, 40, 40), Hsv::new(160, 255, 255));

/// Yellow-green hue band with low saturation floor and high value floor.
pub const SEPAL_RANGE: HsvRange = HsvRange::new(Hsv::new(20, 30, 100), Hsv::new(40, 255, 255));

/// Physical units per pixel at the canonical resolution. A deployment
/// constant, not calibrated per image.
pub const DEFAULT_CM_PER_PIXEL: f64 = 0.02;

/// Configuration for the image-to-feature pipeline.
///
/// Constructed once at startup and injected into the request path;
/// never read from globals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Canonical square resolution for segmentation.
    pub canonical_size: u32,
    /// HSV range isolating petal-like pixels.
    pub petal_range: HsvRange,
    /// HSV range isolating sepal-like pixels.
    pub sepal_range: HsvRange,
    /// Centimeters per pixel conversion factor.
    pub cm_per_pixel: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            canonical_size: CANONICAL_SIZE,
            petal_range: PETAL_RANGE,
            sepal_range: SEPAL_RANGE,
            cm_per_pixel: DEFAULT_CM_PER_PIXEL,
        }
    }
}

impl ExtractionConfig {
    /// Override the conversion factor, keeping the default thresholds.
    pub fn with_cm_per_pixel(cm_per_pixel: f64) -> Self {
        Self {
            cm_per_pixel,
            ..Self::default()
        }
    }
}
