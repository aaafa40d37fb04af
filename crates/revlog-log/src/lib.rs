//! Commit log, commit index, and commit creation.
//!
//! Three pieces, layered:
//!
//! - [`record`] — the text codec for one commit record: identifier line,
//!   timestamp line, `<path> <start> <end>` file-reference lines, message
//!   line.
//! - [`CommitLog`] — commit records appended to a single log file, each
//!   followed by a blank separator line that stays outside the indexed
//!   range. Supports reading a record back by range and scanning the whole
//!   log front-to-back.
//! - [`CommitIndex`] — `<id> <start> <end>` triples mapping each commit
//!   identifier to its record's range, avoiding a full log scan per
//!   lookup. First-match semantics.
//! - [`CommitStore`] — the three logs composed: the ordered commit
//!   protocol (content, then record, then index entry), history listing,
//!   and index rebuild by replaying the commit log.
//!
//! # Concurrency
//!
//! No locks or transactions guard the multi-step commit sequence. The
//! engine is single-threaded by design and unsafe for concurrent use by
//! multiple processes; the index is treated as an advisory cache so a torn
//! multi-log write is detectable and repairable via
//! [`CommitStore::rebuild_index`], not silently corrupting.

pub mod commit_log;
pub mod error;
pub mod index;
pub mod record;
pub mod store;

pub use commit_log::CommitLog;
pub use error::{LogError, LogResult};
pub use index::CommitIndex;
pub use store::CommitStore;
