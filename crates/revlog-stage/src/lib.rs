//! The staging area: the ordered, duplicate-free set of file paths queued
//! for the next commit.
//!
//! Backed by the stage log (one path per line), loaded at open and kept in
//! sync on every mutation. Duplicate detection is by exact string match,
//! not canonicalized path — `./a.txt` and `a.txt` are distinct entries.
//! That matches the engine's on-disk contract and is covered by a test
//! rather than papered over.

pub mod error;
pub mod stage;

pub use error::{StageError, StageResult};
pub use stage::StagingArea;
