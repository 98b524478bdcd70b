//! Feature vector assembly and validation.
//!
//! The classifier is order-sensitive: it was trained on
//! `(sepal_length, sepal_width, petal_length, petal_width)` and the
//! assembled vector must preserve exactly that order. Assembly either
//! produces a complete four-field vector or fails; partial vectors are
//! never returned.

use serde::{Deserialize, Serialize};

use crate::error::{FeatureError, FeatureResult};

/// Number of measurements the classifier consumes.
pub const FEATURE_COUNT: usize = 4;

/// Canonical feature order, matching the training data columns.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

/// Ordered, complete set of flower measurements in centimeters.
///
/// Immutable once constructed; every field is guaranteed present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
}

impl FeatureVector {
    /// Create a feature vector from the four measurements in canonical order.
    pub fn new(sepal_length: f64, sepal_width: f64, petal_length: f64, petal_width: f64) -> Self {
        Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        }
    }

    /// Build a vector from a slice, enforcing the exact-four-entries contract.
    pub fn from_slice(values: &[f64]) -> FeatureResult<Self> {
        match values {
            [sl, sw, pl, pw] => Ok(Self::new(*sl, *sw, *pl, *pw)),
            other => Err(FeatureError::InvalidFeatureCount(other.len())),
        }
    }

    /// The measurements in canonical order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ]
    }
}

/// Optional scalar measurements supplied directly by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarInputs {
    pub sepal_length: Option<f64>,
    pub sepal_width: Option<f64>,
    pub petal_length: Option<f64>,
    pub petal_width: Option<f64>,
}

impl ScalarInputs {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.sepal_length.is_none()
            && self.sepal_width.is_none()
            && self.petal_length.is_none()
            && self.petal_width.is_none()
    }

    /// Resolve form inputs against image-derived measurements.
    ///
    /// When an image was processed, its measurements replace all four
    /// scalar fields at once; there is no field-by-field merge. Without
    /// image features, every scalar field must be present.
    pub fn resolve(&self, image_features: Option<FeatureVector>) -> FeatureResult<FeatureVector> {
        if let Some(features) = image_features {
            return Ok(features);
        }

        match (
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ) {
            (Some(sl), Some(sw), Some(pl), Some(pw)) => Ok(FeatureVector::new(sl, sw, pl, pw)),
            _ => Err(FeatureError::MissingFeatures),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_pass_through_unchanged() {
        let inputs = ScalarInputs {
            sepal_length: Some(5.1),
            sepal_width: Some(3.5),
            petal_length: Some(1.4),
            petal_width: Some(0.2),
        };

        let features = inputs.resolve(None).unwrap();
        assert_eq!(features.as_array(), [5.1, 3.5, 1.4, 0.2]);
    }

    #[test]
    fn test_missing_field_is_hard_error() {
        let inputs = ScalarInputs {
            sepal_length: Some(5.1),
            sepal_width: Some(3.5),
            petal_length: None,
            petal_width: Some(0.2),
        };

        assert_eq!(inputs.resolve(None), Err(FeatureError::MissingFeatures));
    }

    #[test]
    fn test_nothing_supplied_is_missing_features() {
        let inputs = ScalarInputs::default();
        assert!(inputs.is_empty());
        assert_eq!(inputs.resolve(None), Err(FeatureError::MissingFeatures));
    }

    #[test]
    fn test_image_features_override_all_scalars() {
        let inputs = ScalarInputs {
            sepal_length: Some(1.0),
            sepal_width: Some(1.0),
            petal_length: None,
            petal_width: None,
        };
        let derived = FeatureVector::new(6.0, 3.0, 4.2, 1.3);

        // Partial scalars don't matter once image features exist
        let features = inputs.resolve(Some(derived)).unwrap();
        assert_eq!(features, derived);
    }

    #[test]
    fn test_from_slice_enforces_length() {
        assert!(FeatureVector::from_slice(&[5.1, 3.5, 1.4, 0.2]).is_ok());
        assert_eq!(
            FeatureVector::from_slice(&[5.1, 3.5, 1.4]),
            Err(FeatureError::InvalidFeatureCount(3))
        );
        assert_eq!(
            FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(FeatureError::InvalidFeatureCount(5))
        );
    }
}
