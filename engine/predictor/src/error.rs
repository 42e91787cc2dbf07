use data_model::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PredictorError {
    #[error("no trained model for position {position:?}")]
    MissingPositionModel { position: Position },

    #[error("feature vector has {actual} entries, model expects {expected}")]
    FeatureCountMismatch { actual: usize, expected: usize },
}
