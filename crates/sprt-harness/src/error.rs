//! Harness error type.

use sprt_core::TargetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error("unknown unavailable-function policy `{0}` (expected omit or stub)")]
    UnknownPolicy(String),
    #[error("unknown build mode `{0}` (expected building or consuming)")]
    UnknownMode(String),
    #[error("{count} layout mismatch(es) against the native C library")]
    LayoutMismatch { count: usize },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
