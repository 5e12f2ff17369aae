use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{ErrorKind, ValidationError, ROOT};
use crate::core::rules::{coerce_float, coerce_str, optional, require_field, require_object};

/// Descriptive metadata about the deployed model
///
/// `model_version` and `accuracy` are `None` unless supplied, which keeps
/// "not reported" apart from an empty version or a zero accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ModelInfo {
    model_name: String,
    model_version: Option<String>,
    accuracy: Option<f64>,
}

impl ModelInfo {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            model_version: None,
            accuracy: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.model_version = Some(version.into());
        self
    }

    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    /// Validate untrusted input; `null` optionals count as absent
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let obj = require_object(value)?;

        let model_name = require_field(obj, "model_name").and_then(|v| coerce_str("model_name", v));
        let model_version = optional(obj, "model_version", coerce_str);
        let accuracy = optional(obj, "accuracy", coerce_float);

        match (model_name, model_version, accuracy) {
            (Ok(model_name), Ok(model_version), Ok(accuracy)) => Ok(Self {
                model_name,
                model_version,
                accuracy,
            }),
            (name, version, accuracy) => {
                let errors = [name.err(), version.err(), accuracy.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(ValidationError::from_errors(errors)
                    .unwrap_or_else(|| ValidationError::single(ROOT, ErrorKind::Missing)))
            }
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn model_version(&self) -> Option<&str> {
        self.model_version.as_deref()
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }
}

impl TryFrom<Value> for ModelInfo {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value)
    }
}
