use crate::error::{PredictorError, Result};
use crate::features::{vectorize, FEATURE_NAMES};
use crate::model::PositionModel;
use data_model::Position;
use feature_builder::FeatureVector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `predict` output: an expected points estimate with a confidence in
/// `[0, 1]`. Deterministic for a given (feature vector, model version).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PredictionOutput {
    pub expected_points: f64,
    pub confidence: f64,
}

/// The contract every predictor implementation fulfils. Training happens
/// offline; the core only calls `predict`.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector, position: Position) -> Result<PredictionOutput>;
    fn version(&self) -> &str;
}

/// A deterministic, position-specialised linear regressor. The baseline
/// the system must function correctly with alone; optional feed-forward or
/// sequence models, if present, are averaged with this one upstream.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaselinePredictor {
    version: String,
    models: HashMap<Position, PositionModel>,
}

impl BaselinePredictor {
    pub fn new(version: impl Into<String>, models: HashMap<Position, PositionModel>) -> Self {
        BaselinePredictor { version: version.into(), models }
    }

    fn confidence_from(&self, features: &FeatureVector) -> f64 {
        (features.games_played / 10.0).clamp(0.15, 1.0)
    }
}

impl Predictor for BaselinePredictor {
    fn predict(&self, features: &FeatureVector, position: Position) -> Result<PredictionOutput> {
        let model =
            self.models.get(&position).ok_or(PredictorError::MissingPositionModel { position })?;

        let vector = vectorize(features);
        if vector.len() != model.weights.len() {
            return Err(PredictorError::FeatureCountMismatch {
                actual: vector.len(),
                expected: model.weights.len(),
            });
        }

        let raw = model.predict_raw(&vector).max(0.0);
        Ok(PredictionOutput { expected_points: raw, confidence: self.confidence_from(features) })
    }

    fn version(&self) -> &str {
        &self.version
    }
}

pub fn expected_feature_count() -> usize {
    FEATURE_NAMES.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PositionModel;

    fn model_with_bias(bias: f64) -> PositionModel {
        PositionModel { weights: vec![0.0; expected_feature_count()], bias }
    }

    #[test]
    fn predict_is_deterministic_for_same_inputs() {
        let mut models = HashMap::new();
        models.insert(Position::Mid, model_with_bias(4.5));
        let predictor = BaselinePredictor::new("baseline-v1", models);

        let features = FeatureVector { games_played: 10.0, ..Default::default() };
        let a = predictor.predict(&features, Position::Mid).unwrap();
        let b = predictor.predict(&features, Position::Mid).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.expected_points, 4.5);
    }

    #[test]
    fn missing_position_model_is_an_error() {
        let predictor = BaselinePredictor::new("baseline-v1", HashMap::new());
        let result = predictor.predict(&FeatureVector::default(), Position::Gk);
        assert_eq!(result, Err(PredictorError::MissingPositionModel { position: Position::Gk }));
    }

    #[test]
    fn negative_raw_prediction_is_clamped_to_zero() {
        let mut models = HashMap::new();
        models.insert(Position::Fwd, model_with_bias(-5.0));
        let predictor = BaselinePredictor::new("baseline-v1", models);
        let output = predictor.predict(&FeatureVector::default(), Position::Fwd).unwrap();
        assert_eq!(output.expected_points, 0.0);
    }
}
