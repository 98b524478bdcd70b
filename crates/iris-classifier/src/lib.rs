//! Random forest classifier for the iris prediction service.
//!
//! This crate provides:
//! - CART decision trees (Gini impurity, midpoint thresholds)
//! - A bootstrap random forest with `predict` / `predict_proba`
//! - Iris CSV dataset loading and stratified train/test splitting
//! - A serialized model artifact carrying forest plus metadata
//!   (ordered class names, ordered feature names, held-out accuracy)
//!
//! The `iris-train` binary trains on `data/iris.csv` and writes the
//! artifact the API server loads at startup.

pub mod dataset;
pub mod error;
pub mod forest;
pub mod model;
pub mod tree;

// Re-export common types
pub use dataset::Dataset;
pub use error::{ModelError, ModelResult};
pub use forest::{ForestConfig, RandomForest};
pub use model::ModelArtifact;
pub use tree::DecisionTree;
