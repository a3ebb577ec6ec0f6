//! Crate error type
//!
//! The simulation itself never fails; errors only come from the edges
//! (decoding frames, loading configuration).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NekoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown action label {0:?}")]
    UnknownAction(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NekoError>;
