use crate::ids::{GameweekId, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub player: PlayerId,
    pub gameweek: GameweekId,
    pub expected_points: f64,
    pub confidence: f64,
    pub model_version: String,
    pub produced_at: DateTime<Utc>,
    pub actual_points: Option<i32>,
    pub prediction_error: Option<f64>,
}

impl Prediction {
    pub fn resolve(&mut self, actual_points: i32) {
        self.actual_points = Some(actual_points);
        self.prediction_error = Some(self.expected_points - actual_points as f64);
    }
}

/// One applied step in the adjustment audit trail. Most steps are
/// multiplicative (`multiplier`, `additive_delta` absent); calibration bias
/// removal and the premium floor instead record the additive change they
/// made to the running value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjustmentFactor {
    pub label: String,
    pub multiplier: f64,
    pub additive_delta: Option<f64>,
}

impl AdjustmentFactor {
    pub fn multiplicative(label: impl Into<String>, multiplier: f64) -> Self {
        AdjustmentFactor { label: label.into(), multiplier, additive_delta: None }
    }

    pub fn additive(label: impl Into<String>, delta: f64) -> Self {
        AdjustmentFactor { label: label.into(), multiplier: 1.0, additive_delta: Some(delta) }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdjustedPrediction {
    pub player: PlayerId,
    pub gameweek: GameweekId,
    pub raw_expected_points: f64,
    pub adjusted_expected_points: f64,
    pub factors: Vec<AdjustmentFactor>,
}
