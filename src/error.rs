use thiserror::Error;

/// Errors raised by the perceptron crate.
///
/// Configuration and dataset problems are reported before any training state
/// is touched; once an epoch has started, training always runs to completion.
#[derive(Debug, Error)]
pub enum PerceptronError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("training set is empty")]
    EmptyDataset,

    #[error("invalid training example: {0}")]
    InvalidExample(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
