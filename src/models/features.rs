use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{FieldError, ValidationError};
use crate::core::rules::{measurement, require_non_negative, require_object};

/// The four measurements of one Iris flower, in centimetres
///
/// Every value is finite and non-negative. Fields are only readable, so a
/// constructed value always satisfies that contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct IrisFeatures {
    sepal_length: f64,
    sepal_width: f64,
    petal_length: f64,
    petal_width: f64,
}

impl IrisFeatures {
    /// Wire names, in declaration order
    pub const FIELDS: [&'static str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

    /// Validate already-typed measurements
    pub fn new(
        sepal_length: f64,
        sepal_width: f64,
        petal_length: f64,
        petal_width: f64,
    ) -> Result<Self, ValidationError> {
        let checked = [
            require_non_negative("sepal_length", sepal_length),
            require_non_negative("sepal_width", sepal_width),
            require_non_negative("petal_length", petal_length),
            require_non_negative("petal_width", petal_width),
        ];
        Self::collect(checked)
    }

    /// Validate untrusted input, coercing numeric strings to floats
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = require_object(value)?;
        let checked = Self::FIELDS.map(|field| measurement(obj, field));
        Self::collect(checked)
    }

    fn collect(checked: [Result<f64, FieldError>; 4]) -> Result<Self, ValidationError> {
        let mut values = [0.0; 4];
        let mut errors = Vec::new();

        for (slot, result) in values.iter_mut().zip(checked) {
            match result {
                Ok(v) => *slot = v,
                Err(e) => errors.push(e),
            }
        }

        if let Some(err) = ValidationError::from_errors(errors) {
            return Err(err);
        }

        let [sepal_length, sepal_width, petal_length, petal_width] = values;
        Ok(Self {
            sepal_length,
            sepal_width,
            petal_length,
            petal_width,
        })
    }

    pub fn sepal_length(&self) -> f64 {
        self.sepal_length
    }

    pub fn sepal_width(&self) -> f64 {
        self.sepal_width
    }

    pub fn petal_length(&self) -> f64 {
        self.petal_length
    }

    pub fn petal_width(&self) -> f64 {
        self.petal_width
    }

    /// Measurements in `FIELDS` order, as fed to a classifier
    pub fn to_array(&self) -> [f64; 4] {
        [self.sepal_length, self.sepal_width, self.petal_length, self.petal_width]
    }
}

impl TryFrom<Value> for IrisFeatures {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_new_keeps_exact_values() {
        let f = IrisFeatures::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(f.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_collects_every_failure_in_order() {
        let err = IrisFeatures::new(-1.0, 2.0, -3.0, f64::NAN).unwrap_err();
        let fields: Vec<_> = err.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["sepal_length", "petal_length", "petal_width"]);
        assert_eq!(err.kind_of("petal_width"), Some(ErrorKind::NotAFloat));
    }

    #[test]
    fn test_from_value_coerces_strings() {
        let f = IrisFeatures::from_value(&json!({
            "sepal_length": "5.1",
            "sepal_width": 3.5,
            "petal_length": 1,
            "petal_width": "0.2",
            "extra": "ignored"
        }))
        .unwrap();
        assert_eq!(f.to_array(), [5.1, 3.5, 1.0, 0.2]);
    }

    #[test]
    fn test_from_value_missing_field() {
        let err = IrisFeatures::from_value(&json!({
            "sepal_length": 5.1,
            "sepal_width": 3.5,
            "petal_length": 1.4
        }))
        .unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.kind_of("petal_width"), Some(ErrorKind::Missing));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: IrisFeatures = serde_json::from_str(
            r#"{"sepal_length":5.1,"sepal_width":3.5,"petal_length":1.4,"petal_width":0.2}"#,
        )
        .unwrap();
        assert_eq!(ok.petal_length(), 1.4);

        let bad = serde_json::from_str::<IrisFeatures>(
            r#"{"sepal_length":-5.1,"sepal_width":3.5,"petal_length":1.4,"petal_width":0.2}"#,
        );
        let msg = bad.unwrap_err().to_string();
        assert!(msg.contains("sepal_length: must be positive"), "{}", msg);
    }

    #[test]
    fn test_serializes_plain_object() {
        let f = IrisFeatures::new(5.1, 3.5, 1.4, 0.2).unwrap();
        assert_eq!(
            serde_json::to_value(f).unwrap(),
            json!({"sepal_length":5.1,"sepal_width":3.5,"petal_length":1.4,"petal_width":0.2})
        );
    }
}
