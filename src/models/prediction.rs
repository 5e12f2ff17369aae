use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::classifier::Prediction;
use crate::core::error::{ErrorKind, FieldError, ValidationError, ROOT};
use crate::core::rules::{coerce_float, coerce_int, coerce_str, require_field, require_object};
use crate::models::features::IrisFeatures;

/// Result of classifying one flower, echoing the features it was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct PredictionResponse {
    prediction: i64,
    probability: f64,
    class_name: String,
    features: IrisFeatures,
}

impl PredictionResponse {
    pub fn new(
        prediction: i64,
        probability: f64,
        class_name: impl Into<String>,
        features: IrisFeatures,
    ) -> Self {
        Self {
            prediction,
            probability,
            class_name: class_name.into(),
            features,
        }
    }

    /// Wrap classifier output around the features that produced it
    pub fn from_prediction(prediction: Prediction, features: IrisFeatures) -> Self {
        Self::new(
            prediction.class_index as i64,
            prediction.probability,
            prediction.class_name,
            features,
        )
    }

    /// Validate untrusted input. Errors from `features` are reported as
    /// `features.<field>`.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = require_object(value)?;
        let mut errors: Vec<FieldError> = Vec::new();

        let prediction = require_field(obj, "prediction")
            .and_then(|v| coerce_int("prediction", v))
            .map_err(|e| errors.push(e))
            .ok();
        let probability = require_field(obj, "probability")
            .and_then(|v| coerce_float("probability", v))
            .map_err(|e| errors.push(e))
            .ok();
        let class_name = require_field(obj, "class_name")
            .and_then(|v| coerce_str("class_name", v))
            .map_err(|e| errors.push(e))
            .ok();
        let features = match require_field(obj, "features") {
            Ok(v) => IrisFeatures::from_value(v)
                .map_err(|e| errors.extend(e.nested("features").into_errors()))
                .ok(),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (prediction, probability, class_name, features) {
            (Some(prediction), Some(probability), Some(class_name), Some(features)) => Ok(Self {
                prediction,
                probability,
                class_name,
                features,
            }),
            _ => Err(ValidationError::from_errors(errors)
                .unwrap_or_else(|| ValidationError::single(ROOT, ErrorKind::Missing))),
        }
    }

    pub fn prediction(&self) -> i64 {
        self.prediction
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn features(&self) -> &IrisFeatures {
        &self.features
    }
}

impl TryFrom<Value> for PredictionResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_embeds_features_unchanged() {
        let features = IrisFeatures::new(5.1, 3.5, 1.4, 0.2).unwrap();
        let response = PredictionResponse::new(0, 0.97, "setosa", features);

        assert_eq!(response.prediction(), 0);
        assert_eq!(response.probability(), 0.97);
        assert_eq!(response.class_name(), "setosa");
        assert_eq!(*response.features(), features);
    }

    #[test]
    fn test_from_value_reports_nested_and_top_level_errors() {
        let err = PredictionResponse::from_value(&json!({
            "prediction": "two",
            "probability": 0.5,
            "class_name": 7,
            "features": {
                "sepal_length": -1.0,
                "sepal_width": 3.0,
                "petal_length": 4.0,
                "petal_width": 1.0
            }
        }))
        .unwrap_err();

        assert_eq!(err.kind_of("prediction"), Some(ErrorKind::NotAnInteger));
        assert_eq!(err.kind_of("class_name"), Some(ErrorKind::NotAString));
        assert_eq!(err.kind_of("features.sepal_length"), Some(ErrorKind::Negative));
        assert_eq!(err.errors().len(), 3);
    }

    #[test]
    fn test_probability_has_no_range_check() {
        let response = PredictionResponse::from_value(&json!({
            "prediction": 1,
            "probability": 1.5,
            "class_name": "versicolor",
            "features": {
                "sepal_length": 5.9,
                "sepal_width": 2.8,
                "petal_length": 4.3,
                "petal_width": 1.3
            }
        }))
        .unwrap();
        assert_eq!(response.probability(), 1.5);
    }

    #[test]
    fn test_prediction_beyond_i64_rejected() {
        let err = PredictionResponse::from_value(&json!({
            "prediction": 9223372036854775808u64,
            "probability": 0.8,
            "class_name": "versicolor",
            "features": {
                "sepal_length": 5.9,
                "sepal_width": 2.8,
                "petal_length": 4.3,
                "petal_width": 1.3
            }
        }))
        .unwrap_err();
        assert_eq!(err.kind_of("prediction"), Some(ErrorKind::NotAnInteger));
        assert_eq!(err.errors().len(), 1);
    }

    #[test]
    fn test_missing_features() {
        let err = PredictionResponse::from_value(&json!({
            "prediction": 1,
            "probability": 0.8,
            "class_name": "versicolor"
        }))
        .unwrap_err();
        assert_eq!(err.kind_of("features"), Some(ErrorKind::Missing));
    }
}
