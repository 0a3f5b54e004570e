use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model not supported: {0}")]
    UnsupportedModel(String),

    #[error("invalid model entry: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
