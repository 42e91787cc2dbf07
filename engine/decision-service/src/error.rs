use thiserror::Error;

pub type Result<T> = std::result::Result<T, DecisionCoreError>;

/// Wraps every component error the orchestrator can observe. Propagation
/// follows the same split the components themselves use: I/O and upstream
/// failures are retried or demoted upstream of this enum, so anything that
/// reaches here is either already final or a logical invariant violation.
#[derive(Error, Debug)]
pub enum DecisionCoreError {
    #[error("data layer: {0}")]
    DataModel(#[from] data_model::DataModelError),

    #[error("rules engine: {0}")]
    Rules(#[from] rules_engine::RulesError),

    #[error("predictor: {0}")]
    Predictor(#[from] predictor::PredictorError),

    #[error("optimiser: {0}")]
    Optimiser(#[from] team_optimiser::OptimiserError),

    #[error("prediction gap: no prediction produced for {missing} of {total} current squad members")]
    PredictionGap { missing: usize, total: usize },

    #[error("configuration error: {context}")]
    Configuration { context: String },
}
