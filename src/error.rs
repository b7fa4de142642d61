use thiserror::Error;

/// Error type returned by a classifier's `fit`/`predict`. Opaque to the
/// harness: whatever the underlying model library raises is boxed and
/// surfaced unchanged.
pub type ModelError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("classifier failed on fold {fold}")]
    Model {
        fold: usize,
        #[source]
        source: ModelError,
    },
}
