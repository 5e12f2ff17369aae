use serde::{Deserialize, Serialize};

use crate::core::{FieldError, ValidationError};

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
            details: Vec::new(),
        }
    }

    /// 422 body listing every rejected field
    pub fn validation(err: ValidationError) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: err.to_string(),
            status_code: 422,
            details: err.into_errors(),
        }
    }
}
