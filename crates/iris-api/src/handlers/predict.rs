//! Prediction handler: the request pipeline around the extraction core.
//!
//! Each request is processed independently: parse the multipart form,
//! run the image pipeline if an image was uploaded, resolve the feature
//! vector, classify, respond. Any stage failure short-circuits to a
//! single terminal error response.

use axum::extract::multipart::{Field, Multipart};
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use iris_models::{PredictionResult, ScalarInputs};
use iris_vision::extract_features;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Prediction endpoint.
///
/// Accepts up to four numeric form fields and/or an `image` file field.
/// Image-derived measurements replace all four scalars whenever an
/// image is present.
pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<PredictionResult>> {
    // Reject before running any pipeline work
    let model = state.model.clone().ok_or(ApiError::ModelUnavailable)?;

    let mut scalars = ScalarInputs::default();
    let mut image_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "sepal_length" => scalars.sepal_length = scalar_field(field).await?,
            "sepal_width" => scalars.sepal_width = scalar_field(field).await?,
            "petal_length" => scalars.petal_length = scalar_field(field).await?,
            "petal_width" => scalars.petal_width = scalar_field(field).await?,
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read image: {e}")))?;
                if !data.is_empty() {
                    image_bytes = Some(data.to_vec());
                }
            }
            other => {
                debug!(field = %other, "Ignoring unknown form field");
            }
        }
    }

    // Once an image was supplied, a decode failure is terminal; the
    // scalars are never used as a fallback.
    let image_features = match &image_bytes {
        Some(bytes) => {
            debug!(size = bytes.len(), "Extracting features from uploaded image");
            Some(extract_features(bytes, &state.extraction)?)
        }
        None => None,
    };

    let features = scalars.resolve(image_features)?;

    let input = features.as_array();
    let predicted_index = model.predict(&input);
    let probabilities = model.predict_proba(&input);

    let result = PredictionResult::from_distribution(
        predicted_index,
        &model.class_names,
        &probabilities,
        features,
    );

    info!(
        prediction = %result.prediction,
        confidence = result.confidence,
        from_image = image_bytes.is_some(),
        "Prediction complete"
    );

    Ok(Json(result))
}

/// Parse a numeric form field; an empty field counts as absent.
async fn scalar_field(field: Field<'_>) -> ApiResult<Option<f64>> {
    let name = field.name().unwrap_or_default().to_string();
    let text = field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read field {name}: {e}")))?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ApiError::bad_request(format!("Invalid numeric value for {name}: {trimmed:?}")))
}
