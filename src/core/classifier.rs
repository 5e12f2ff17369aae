use thiserror::Error;

use crate::models::IrisFeatures;

/// Errors raised by a classifier
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Classifier has no classes")]
    NoClasses,

    #[error("Class scores are not finite for input {0:?}")]
    NonFiniteScore([f64; 4]),
}

/// Output of one classification
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    pub probability: f64,
    pub class_name: String,
}

/// Inference collaborator consumed by the predict route
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &IrisFeatures) -> Result<Prediction, InferenceError>;

    /// Class labels, indexed by `Prediction::class_index`
    fn classes(&self) -> &[String];
}

/// Mean measurements of one species
#[derive(Debug, Clone)]
pub struct Centroid {
    pub class_name: String,
    pub means: [f64; 4],
}

/// Nearest-centroid classifier
///
/// Class probabilities are a softmax over the negative squared distances
/// to each centroid, so the closest centroid always wins.
#[derive(Debug, Clone)]
pub struct CentroidClassifier {
    centroids: Vec<Centroid>,
    labels: Vec<String>,
}

impl CentroidClassifier {
    /// Class indices follow the order of `centroids`
    pub fn new(centroids: Vec<Centroid>) -> Result<Self, InferenceError> {
        if centroids.is_empty() {
            return Err(InferenceError::NoClasses);
        }
        Ok(Self::from_centroids(centroids))
    }

    fn from_centroids(centroids: Vec<Centroid>) -> Self {
        let labels = centroids.iter().map(|c| c.class_name.clone()).collect();
        Self { centroids, labels }
    }

    /// Per-species means of Fisher's Iris data set
    pub fn iris() -> Self {
        let centroid = |name: &str, means: [f64; 4]| Centroid {
            class_name: name.to_string(),
            means,
        };

        Self::from_centroids(vec![
            centroid("setosa", [5.006, 3.428, 1.462, 0.246]),
            centroid("versicolor", [5.936, 2.770, 4.260, 1.326]),
            centroid("virginica", [6.588, 2.974, 5.552, 2.026]),
        ])
    }
}

#[inline]
fn squared_distance(a: &[f64; 4], b: &[f64; 4]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

impl Classifier for CentroidClassifier {
    fn predict(&self, features: &IrisFeatures) -> Result<Prediction, InferenceError> {
        let input = features.to_array();
        let scores: Vec<f64> = self
            .centroids
            .iter()
            .map(|c| -squared_distance(&input, &c.means))
            .collect();

        // Shift by the max score before exponentiating
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
        let total: f64 = exps.iter().sum();

        if !total.is_finite() || total <= 0.0 {
            return Err(InferenceError::NonFiniteScore(input));
        }

        let (class_index, best) = exps
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or(InferenceError::NoClasses)?;

        let prediction = Prediction {
            class_index,
            probability: best / total,
            class_name: self.labels[class_index].clone(),
        };

        tracing::debug!(
            "Classified {:?} as {} (p={:.3})",
            input,
            prediction.class_name,
            prediction.probability
        );

        Ok(prediction)
    }

    fn classes(&self) -> &[String] {
        &self.labels
    }
}
