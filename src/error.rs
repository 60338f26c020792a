//! Error types for batch-worker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to fetch work items: {0}")]
    FetchError(String),

    #[error("Work item {item_id} failed: {reason}")]
    ItemFailed { item_id: String, reason: String },

    #[error("Work item timed out")]
    TaskTimeout,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("File system error")]
    FsError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WorkerError>;
