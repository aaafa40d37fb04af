use std::io;

/// Errors from staging operations.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// The path does not resolve to an existing file under the work dir.
    #[error("path not found: {0}")]
    PathNotFound(String),

    /// The path is already present in the staging area.
    #[error("path already staged: {0}")]
    AlreadyStaged(String),

    /// I/O error from the stage log.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for staging operations.
pub type StageResult<T> = Result<T, StageError>;
