//! Prediction response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// Classification outcome returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted class name (as stored in model metadata).
    pub prediction: String,
    /// Maximum class probability for this input.
    pub confidence: f64,
    /// Per-class probabilities keyed by lowercased class name.
    pub probabilities: BTreeMap<String, f64>,
    /// Echo of the resolved measurements the classifier saw.
    pub input_features: FeatureVector,
}

impl PredictionResult {
    /// Assemble a result from an ordered probability distribution.
    ///
    /// `class_names` and `probabilities` are index-aligned; keys in the
    /// output map are lowercased class names.
    pub fn from_distribution(
        predicted_index: usize,
        class_names: &[String],
        probabilities: &[f64],
        input_features: FeatureVector,
    ) -> Self {
        let prediction = class_names
            .get(predicted_index)
            .cloned()
            .unwrap_or_default();

        let probability_map: BTreeMap<String, f64> = class_names
            .iter()
            .zip(probabilities.iter())
            .map(|(name, prob)| (name.to_lowercase(), *prob))
            .collect();

        let confidence = probabilities.iter().copied().fold(0.0_f64, f64::max);

        Self {
            prediction,
            confidence,
            probabilities: probability_map,
            input_features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_names() -> Vec<String> {
        vec!["Setosa".to_string(), "Versicolor".to_string(), "Virginica".to_string()]
    }

    #[test]
    fn test_keys_are_lowercased_class_names() {
        let result = PredictionResult::from_distribution(
            0,
            &class_names(),
            &[0.8, 0.15, 0.05],
            FeatureVector::new(5.1, 3.5, 1.4, 0.2),
        );

        let keys: Vec<_> = result.probabilities.keys().cloned().collect();
        assert_eq!(keys, vec!["setosa", "versicolor", "virginica"]);
    }

    #[test]
    fn test_confidence_is_max_probability() {
        let result = PredictionResult::from_distribution(
            1,
            &class_names(),
            &[0.2, 0.7, 0.1],
            FeatureVector::new(6.0, 2.9, 4.5, 1.5),
        );

        assert_eq!(result.prediction, "Versicolor");
        assert!((result.confidence - 0.7).abs() < 1e-12);
    }
}
