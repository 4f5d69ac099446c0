use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported video source: {0}")]
    UnsupportedSource(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
