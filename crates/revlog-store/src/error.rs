use std::io;

use revlog_types::ByteRange;

/// Errors from append-only log operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested range extends past the end of the log.
    #[error("range {requested} is out of range for log of {len} bytes")]
    OutOfRange { requested: ByteRange, len: u64 },

    /// I/O error from the underlying file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
