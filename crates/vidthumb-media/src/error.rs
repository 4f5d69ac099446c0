use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("video file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("failed to open file: {0}")]
    OpenFailed(String),

    #[error("no video stream found")]
    NoVideoStream,

    #[error("decoder error: {0}")]
    DecoderError(String),

    #[error("seek error: {0}")]
    SeekError(String),

    #[error("no decodable frame near {0:.3}s")]
    NoFrame(f64),

    #[error("encoder error: {0}")]
    EncoderError(String),

    #[error("fetch error: {0}")]
    FetchError(String),

    #[error("worker exited without delivering a result")]
    WorkerExited,

    #[error(transparent)]
    Core(#[from] vidthumb_core::error::CoreError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MediaError>;
