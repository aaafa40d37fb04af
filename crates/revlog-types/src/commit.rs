use serde::{Deserialize, Serialize};

use crate::id::CommitId;
use crate::range::ByteRange;
use crate::temporal::Timestamp;

/// Pointer into the content log for one file's bytes at commit time.
///
/// Immutable once written; owned by the commit that created it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Work-tree-relative path of the file.
    pub path: String,
    /// Where the file's bytes live in the content log.
    pub range: ByteRange,
}

impl FileRef {
    /// Create a new file reference.
    pub fn new(path: impl Into<String>, range: ByteRange) -> Self {
        Self {
            path: path.into(),
            range,
        }
    }
}

/// An immutable recorded snapshot.
///
/// Created once at commit time, appended to the commit log, never mutated
/// or deleted thereafter — there is no amend, rebase, or supersede.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Content-derived identifier.
    pub id: CommitId,
    /// When the commit was recorded.
    pub timestamp: Timestamp,
    /// Single-line commit message.
    pub message: String,
    /// Referenced files, in staging order.
    pub files: Vec<FileRef>,
}

/// The byte range of one serialized commit inside the commit log.
///
/// Created atomically alongside its commit; the index file holds one entry
/// per commit in commit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// The commit's identifier.
    pub id: CommitId,
    /// Where the commit record lives in the commit log.
    pub range: ByteRange,
}

impl IndexEntry {
    /// Create a new index entry.
    pub fn new(id: CommitId, range: ByteRange) -> Self {
        Self { id, range }
    }
}
