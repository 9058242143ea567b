use thiserror::Error;

/// Core error types for mini-llm
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Token sequence is empty")]
    EmptyTokenSequence,

    #[error("Cannot embed an empty token")]
    EmptyToken,

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Logits are empty")]
    EmptyLogits,

    #[error("Invalid tensor shape: {0}")]
    InvalidShape(String),

    #[error("Invalid probability distribution: {0}")]
    InvalidDistribution(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
