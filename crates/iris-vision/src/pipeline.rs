//! The composed extraction pipeline: bytes in, feature vector out.

use image::imageops::{self, FilterType};
use image::GrayImage;
use iris_models::FeatureVector;
use tracing::debug;

use crate::config::ExtractionConfig;
use crate::convert::px_to_cm;
use crate::error::{VisionError, VisionResult};
use crate::measure::{length_width, PixelMeasurement};
use crate::region::largest_region;
use crate::segment::color_mask;

/// Derive the four flower measurements from uploaded image bytes.
///
/// Stages: decode, resize to the canonical resolution, threshold the
/// petal and sepal color bands, measure the dominant region of each
/// mask, convert pixels to centimeters. A decode failure is terminal;
/// empty masks are not — they yield zero measurements and the request
/// proceeds to classification with those.
pub fn extract_features(bytes: &[u8], config: &ExtractionConfig) -> VisionResult<FeatureVector> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| VisionError::InvalidImage(e.to_string()))?;

    let image = imageops::resize(
        &decoded.to_rgb8(),
        config.canonical_size,
        config.canonical_size,
        FilterType::Triangle,
    );

    let petal = measure_mask(&color_mask(&image, &config.petal_range));
    let sepal = measure_mask(&color_mask(&image, &config.sepal_range));

    debug!(
        petal_length_px = petal.length_px,
        petal_width_px = petal.width_px,
        sepal_length_px = sepal.length_px,
        sepal_width_px = sepal.width_px,
        "Extracted pixel measurements"
    );

    Ok(FeatureVector::new(
        px_to_cm(sepal.length_px, config.cm_per_pixel),
        px_to_cm(sepal.width_px, config.cm_per_pixel),
        px_to_cm(petal.length_px, config.cm_per_pixel),
        px_to_cm(petal.width_px, config.cm_per_pixel),
    ))
}

/// Measure the dominant region of a mask, mapping "no region" to zero.
fn measure_mask(mask: &GrayImage) -> PixelMeasurement {
    largest_region(mask)
        .as_ref()
        .map(length_width)
        .unwrap_or(PixelMeasurement::ZERO)
}
