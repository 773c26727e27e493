//! Harness-level errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization: {0}")]
    Json(#[from] serde_json::Error),
}
