use serde::{Deserialize, Serialize};

/// A trained linear model for one position: `bias + dot(weights, features)`.
/// The baseline regressor is deliberately simple (no kernel, no trees) so
/// its output is exactly reproducible from a persisted artefact.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PositionModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl PositionModel {
    pub fn zeroed(feature_count: usize) -> Self {
        PositionModel { weights: vec![0.0; feature_count], bias: 0.0 }
    }

    pub fn predict_raw(&self, features: &[f64]) -> f64 {
        let dot: f64 = self.weights.iter().zip(features.iter()).map(|(w, x)| w * x).sum();
        dot + self.bias
    }
}
