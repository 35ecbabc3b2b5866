//! Error types for box-keygen

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeygenError>;

#[derive(Error, Debug)]
pub enum KeygenError {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(rand::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
