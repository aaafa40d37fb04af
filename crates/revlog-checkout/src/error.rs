use std::io;

use revlog_log::LogError;
use revlog_store::StoreError;

/// Errors from snapshot reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// There is no commit to materialize.
    #[error("no commits in repository")]
    NoCommits,

    /// Index lookup or record parse failure.
    #[error(transparent)]
    Log(#[from] LogError),

    /// Content log read failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// I/O error writing materialized files.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for reconstruction operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
