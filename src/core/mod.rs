// Schema rules and the inference seam
pub mod classifier;
pub mod error;
pub mod rules;

pub use classifier::{Centroid, CentroidClassifier, Classifier, InferenceError, Prediction};
pub use error::{ErrorKind, FieldError, ValidationError};
pub use rules::require_non_negative;
