//! Append-only byte logs for the revlog storage engine.
//!
//! This crate implements the single validated write path every revlog log
//! goes through. [`AppendLog`] tracks one write offset (initialized from
//! the file's length at open), and every append returns the
//! [`ByteRange`](revlog_types::ByteRange) it occupied — call sites never
//! recompute offsets by hand. [`ContentStore`] is the content log built on
//! top of it: raw concatenated file bytes whose boundaries are known only
//! via the file references recorded elsewhere.
//!
//! # Design Rules
//!
//! 1. Logs grow strictly forward; there is no truncation or deletion
//!    primitive and no in-place modification.
//! 2. Ranges returned by successive appends never overlap.
//! 3. Reads validate the requested range against the physical log size.
//! 4. All I/O errors are propagated, never silently ignored.
//!
//! # Concurrency
//!
//! Execution is single-threaded and synchronous. A log is owned by one
//! operation for its entire duration; the engine is not safe for
//! concurrent invocation by multiple processes, and does not try to be.

pub mod contents;
pub mod error;
pub mod log;

pub use contents::ContentStore;
pub use error::{StoreError, StoreResult};
pub use log::AppendLog;
