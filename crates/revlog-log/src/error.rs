use std::io;

use revlog_store::StoreError;
use revlog_types::TypeError;

/// Errors from commit log and index operations.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A commit message must be non-empty.
    #[error("commit message is empty")]
    EmptyMessage,

    /// A commit message must fit on one record line.
    #[error("commit message must be a single line")]
    MultilineMessage,

    /// No index entry matches the identifier.
    #[error("commit not found: {0}")]
    HashNotFound(String),

    /// A commit record does not match the expected field layout.
    #[error("malformed commit record at offset {offset}: {reason}")]
    Parse { offset: u64, reason: String },

    /// Underlying log failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid foundation value (range, hex, timestamp).
    #[error(transparent)]
    Type(#[from] TypeError),

    /// I/O error from the index file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for commit log operations.
pub type LogResult<T> = Result<T, LogError>;
