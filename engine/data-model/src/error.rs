use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataModelError>;

/// Errors surfaced by the Repository and adapter traits. No free-form
/// strings in payload fields, only a `context` string for operator
/// debugging.
#[derive(Error, Debug)]
pub enum DataModelError {
    #[error("upstream unavailable: {context}")]
    UpstreamUnavailable { context: String },

    #[error("resource not found: {kind} {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("concurrent writer conflict on {aggregate}")]
    RepositoryConflict { aggregate: &'static str },

    #[error("invalid operation: {context}")]
    InvalidOperation { context: String },

    #[error("workflow already running for gameweek {gameweek}")]
    WorkflowAlreadyRunning { gameweek: u8 },
}
