//! Iris Serve - validated inference API for the Iris flower classifier
//!
//! The schema layer (`models`) validates inbound measurements and shapes
//! prediction responses and model metadata. `core` holds the field rules,
//! the validation error type and the classifier seam; `routes` exposes
//! them over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{CentroidClassifier, Classifier, ValidationError};
pub use models::{IrisFeatures, ModelInfo, PredictionResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let features = IrisFeatures::new(5.1, 3.5, 1.4, 0.2).unwrap();
        let prediction = CentroidClassifier::iris().predict(&features).unwrap();
        let response = PredictionResponse::from_prediction(prediction, features);
        assert_eq!(response.class_name(), "setosa");
    }
}
