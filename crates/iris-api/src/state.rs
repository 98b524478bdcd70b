//! Application state.

use std::sync::Arc;

use tracing::{error, info, warn};

use iris_classifier::{ModelArtifact, ModelError};
use iris_vision::ExtractionConfig;

use crate::config::ApiConfig;

/// Shared application state.
///
/// The model is loaded once at startup and shared read-only across
/// requests; predictions need no locking. A missing artifact is not
/// fatal: the server starts and predict/model-info answer 503 until a
/// model is trained.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub extraction: ExtractionConfig,
    pub model: Option<Arc<ModelArtifact>>,
}

impl AppState {
    /// Create application state, attempting to load the model artifact.
    pub fn new(config: ApiConfig) -> Self {
        let extraction = ExtractionConfig::with_cm_per_pixel(config.cm_per_pixel);

        let model = match ModelArtifact::load(&config.model_path) {
            Ok(artifact) => {
                info!(
                    accuracy = %format!("{:.2}%", artifact.accuracy * 100.0),
                    classes = ?artifact.class_names,
                    "Model loaded successfully"
                );
                Some(Arc::new(artifact))
            }
            Err(ModelError::ArtifactNotFound(path)) => {
                warn!(path = %path.display(), "Model artifact not found; run iris-train first");
                None
            }
            Err(e) => {
                error!(error = %e, "Error loading model");
                None
            }
        };

        Self {
            config,
            extraction,
            model,
        }
    }
}
