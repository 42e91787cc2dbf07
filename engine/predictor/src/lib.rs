//! The predictor plug-in contract and its baseline implementation: a
//! deterministic, position-specialised linear regressor trained offline and
//! consumed read-only by the rest of the decision core.

pub mod baseline;
pub mod error;
pub mod features;
pub mod model;
pub mod training;

pub use baseline::{expected_feature_count, BaselinePredictor, PredictionOutput, Predictor};
pub use error::{PredictorError, Result};
pub use features::{vectorize, FEATURE_NAMES};
pub use model::PositionModel;
pub use training::{train_position_model, TrainingConfig, TrainingRecord, ValidationMetrics};
