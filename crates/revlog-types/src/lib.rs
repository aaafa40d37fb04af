//! Foundation types for the revlog storage engine.
//!
//! This crate provides the identity, temporal, and structural types used
//! throughout the revlog workspace. Every other revlog crate depends on
//! `revlog-types`.
//!
//! # Key Types
//!
//! - [`CommitId`] — Content-addressed commit identifier (BLAKE3 hash)
//! - [`ByteRange`] — Validated half-open range into an append-only log
//! - [`Timestamp`] — UTC wall-clock time, RFC 3339 on the wire
//! - [`FileRef`] — One file's content location inside the content log
//! - [`Commit`] — An immutable recorded snapshot
//! - [`IndexEntry`] — A commit's location inside the commit log
//! - [`Layout`] — The on-disk layout of a repository, passed explicitly
//!   into each component at construction

pub mod commit;
pub mod error;
pub mod id;
pub mod layout;
pub mod range;
pub mod temporal;

pub use commit::{Commit, FileRef, IndexEntry};
pub use error::TypeError;
pub use id::CommitId;
pub use layout::Layout;
pub use range::ByteRange;
pub use temporal::Timestamp;
