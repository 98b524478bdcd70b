//! Service banner and model metadata handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Root banner response.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub model_loaded: bool,
}

/// Service banner endpoint.
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Iris Flower Classification API".to_string(),
        status: "running".to_string(),
        model_loaded: state.model.is_some(),
    })
}

/// Model metadata response.
#[derive(Serialize)]
pub struct ModelInfoResponse {
    pub feature_names: Vec<String>,
    pub target_names: Vec<String>,
    pub accuracy: f64,
    pub model_type: String,
}

/// Model metadata endpoint. 503 until a model has been trained.
pub async fn model_info(State(state): State<AppState>) -> ApiResult<Json<ModelInfoResponse>> {
    let model = state.model.as_ref().ok_or(ApiError::ModelUnavailable)?;

    Ok(Json(ModelInfoResponse {
        feature_names: model.feature_names.clone(),
        target_names: model.class_names.clone(),
        accuracy: model.accuracy,
        model_type: "Random Forest Classifier".to_string(),
    }))
}
