use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;
use std::sync::Arc;

use crate::core::Classifier;
use crate::models::{ErrorResponse, HealthResponse, IrisFeatures, ModelInfo, PredictionResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
    pub model_info: ModelInfo,
}

/// Configure prediction and metadata routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/model/info", web::get().to(model_info))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Metadata of the served model
///
/// GET /api/v1/model/info
async fn model_info(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.model_info)
}

/// Classify one flower
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "sepal_length": 5.1,
///   "sepal_width": 3.5,
///   "petal_length": 1.4,
///   "petal_width": 0.2
/// }
/// ```
///
/// Invalid measurements are answered with 422 and one entry per rejected field.
async fn predict(state: web::Data<AppState>, body: web::Json<Value>) -> impl Responder {
    let features = match IrisFeatures::from_value(&body) {
        Ok(features) => features,
        Err(errors) => {
            tracing::info!("Rejected predict request: {}", errors);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse::validation(errors));
        }
    };

    let prediction = match state.classifier.predict(&features) {
        Ok(prediction) => prediction,
        Err(e) => {
            tracing::error!("Inference failed for {:?}: {}", features, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(
                "inference_failed",
                e.to_string(),
                500,
            ));
        }
    };

    let response = PredictionResponse::from_prediction(prediction, features);

    tracing::info!(
        "Predicted {} (class {}, p={:.3})",
        response.class_name(),
        response.prediction(),
        response.probability()
    );

    HttpResponse::Ok().json(response)
}
