//! Axum HTTP API server for the iris prediction service.
//!
//! This crate provides:
//! - The `/api/predict` endpoint (form scalars and/or uploaded image)
//! - Model metadata and health endpoints
//! - CORS, request-id, request-logging and body-limit middleware
//! - Startup model loading into immutable shared state

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
