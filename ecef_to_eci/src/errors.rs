use aerospace::transformations::FrameErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliErrors {
    #[error("FrameError: {0}")]
    FrameError(#[from] FrameErrors),
    #[error("invalid numeric argument for {0}: '{1}'")]
    InvalidNumber(&'static str, String),
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),
}
