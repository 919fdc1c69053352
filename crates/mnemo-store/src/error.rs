//! Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot delete the last remaining workspace")]
    LastWorkspace,

    #[error("unknown workspace: {0}")]
    UnknownWorkspace(String),

    #[error("corrupt document: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Io(#[from] std::io::Error),
}
