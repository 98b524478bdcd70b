//! Serialized model artifact: forest plus metadata.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::forest::RandomForest;

/// A trained model with the metadata the API needs for labelling.
///
/// Written by `iris-train` as JSON, loaded once at server startup and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub forest: RandomForest,
    /// Ordered feature names matching the training column order.
    pub feature_names: Vec<String>,
    /// Ordered class names; `forest.predict` indexes into this list.
    pub class_names: Vec<String>,
    /// Accuracy on the held-out test split.
    pub accuracy: f64,
    pub trained_at: DateTime<Utc>,
}

impl ModelArtifact {
    /// Load an artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::ArtifactNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the artifact as JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ModelResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// Predicted class index for one feature vector.
    pub fn predict(&self, features: &[f64]) -> usize {
        self.forest.predict(features)
    }

    /// Per-class probability distribution, index-aligned with
    /// `class_names`.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        self.forest.predict_proba(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::forest::ForestConfig;

    const SAMPLE: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
4.9,3.0,1.4,0.2,setosa
5.0,3.4,1.5,0.2,setosa
7.0,3.2,4.7,1.4,versicolor
6.4,3.2,4.5,1.5,versicolor
6.9,3.1,4.9,1.5,versicolor
";

    fn trained_artifact() -> ModelArtifact {
        let dataset = Dataset::parse(SAMPLE).unwrap();
        let config = ForestConfig {
            n_trees: 10,
            ..ForestConfig::default()
        };
        let forest = RandomForest::fit(
            dataset.features.view(),
            &dataset.labels,
            dataset.class_names.len(),
            &config,
        );
        ModelArtifact {
            forest,
            feature_names: dataset.feature_names,
            class_names: dataset.class_names,
            accuracy: 1.0,
            trained_at: Utc::now(),
        }
    }

    #[test]
    fn test_save_load_round_trip_preserves_predictions() {
        let artifact = trained_artifact();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("model.json");

        artifact.save(&path).unwrap();
        let loaded = ModelArtifact::load(&path).unwrap();

        let sample = [5.1, 3.5, 1.4, 0.2];
        assert_eq!(artifact.predict(&sample), loaded.predict(&sample));
        assert_eq!(artifact.predict_proba(&sample), loaded.predict_proba(&sample));
        assert_eq!(loaded.class_names, vec!["setosa", "versicolor"]);
    }

    #[test]
    fn test_missing_artifact_is_a_typed_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ModelArtifact::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ModelError::ArtifactNotFound(_))));
    }
}
