// Model exports
pub mod features;
pub mod model_info;
pub mod prediction;
pub mod responses;

pub use features::IrisFeatures;
pub use model_info::ModelInfo;
pub use prediction::PredictionResponse;
pub use responses::{ErrorResponse, HealthResponse};
