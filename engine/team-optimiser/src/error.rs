use thiserror::Error;

pub type Result<T> = std::result::Result<T, OptimiserError>;

/// The optimiser re-validates its own output before returning one; any
/// failure here is a bug, not an expected runtime condition.
#[derive(Error, Debug)]
pub enum OptimiserError {
    #[error("optimiser produced an invalid draft: {source}")]
    InvalidDraft {
        #[from]
        source: rules_engine::RulesError,
    },

    #[error("no legal formation found for the given squad")]
    NoLegalFormation,

    #[error("prediction coverage incomplete: missing adjusted expected points for {missing} of {total} squad members")]
    IncompletePredictionCoverage { missing: usize, total: usize },
}
