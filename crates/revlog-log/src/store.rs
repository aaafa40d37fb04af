use tracing::{debug, info};

use revlog_store::ContentStore;
use revlog_types::{Commit, CommitId, FileRef, IndexEntry, Layout, Timestamp};

use crate::commit_log::CommitLog;
use crate::error::{LogError, LogResult};
use crate::index::CommitIndex;

/// Domain tag mixed into every commit identifier digest.
const COMMIT_ID_DOMAIN: &[u8] = b"revlog-commit-v1";

/// The three durable logs composed: content log, commit log, commit index.
///
/// `create_commit` runs the ordered commit protocol — content first, then
/// the commit record, then the index entry. There is no atomicity across
/// the three appends: a crash mid-sequence leaves a torn write. Because the
/// index is an advisory cache of the commit log, the damage is bounded —
/// [`rebuild_index`](CommitStore::rebuild_index) replays the log and
/// restores a consistent index, and content bytes without a commit record
/// are unreferenced garbage, never misattributed history.
#[derive(Debug)]
pub struct CommitStore {
    contents: ContentStore,
    log: CommitLog,
    index: CommitIndex,
}

impl CommitStore {
    /// Open the three logs described by `layout`.
    pub fn open(layout: &Layout) -> LogResult<Self> {
        Ok(Self {
            contents: ContentStore::open(&layout.contents_path())?,
            log: CommitLog::open(&layout.commits_path())?,
            index: CommitIndex::open(&layout.index_path())?,
        })
    }

    /// Record a new commit from the given `(path, content)` pairs.
    ///
    /// Validation (empty or multi-line message) happens before any log is
    /// touched, so a failed call is a no-op. On success the commit is
    /// durably appended to all three logs and returned.
    pub fn create_commit(
        &mut self,
        message: &str,
        files: &[(String, Vec<u8>)],
    ) -> LogResult<Commit> {
        if message.is_empty() {
            return Err(LogError::EmptyMessage);
        }
        if message.contains('\n') {
            return Err(LogError::MultilineMessage);
        }

        let timestamp = Timestamp::now();
        let id = commit_id(files, message, &timestamp);

        let mut refs = Vec::with_capacity(files.len());
        for (path, bytes) in files {
            let range = self.contents.append(bytes)?;
            debug!(path, range = %range, "content appended");
            refs.push(FileRef::new(path.clone(), range));
        }

        let commit = Commit {
            id,
            timestamp,
            message: message.to_string(),
            files: refs,
        };
        let range = self.log.append(&commit)?;
        self.index.append(IndexEntry::new(id, range))?;

        info!(id = %id.short_hex(), files = files.len(), "commit recorded");
        Ok(commit)
    }

    /// Find the index entry for an exact identifier.
    pub fn lookup(&self, id: &CommitId) -> LogResult<IndexEntry> {
        self.index.lookup(id)
    }

    /// Find the index entry for an identifier or unique-enough hex prefix.
    pub fn resolve(&self, prefix: &str) -> LogResult<IndexEntry> {
        self.index.resolve(prefix)
    }

    /// The most recent commit's index entry, if any commit exists.
    pub fn latest(&self) -> Option<IndexEntry> {
        self.index.latest().copied()
    }

    /// Read the commit record an index entry points at.
    pub fn read_commit(&self, entry: &IndexEntry) -> LogResult<Commit> {
        self.log.read(entry.range)
    }

    /// All commits, most recent first.
    pub fn list_all(&self) -> LogResult<Vec<Commit>> {
        let mut commits = self
            .index
            .entries()
            .iter()
            .map(|entry| self.read_commit(entry))
            .collect::<LogResult<Vec<_>>>()?;
        commits.reverse();
        Ok(commits)
    }

    /// Rebuild the index by replaying the commit log.
    ///
    /// Returns the number of commits indexed. A torn record at the log
    /// tail is dropped; every complete record becomes an index entry.
    pub fn rebuild_index(&mut self) -> LogResult<usize> {
        let scanned = self.log.scan()?;
        let entries: Vec<IndexEntry> = scanned
            .into_iter()
            .map(|(range, commit)| IndexEntry::new(commit.id, range))
            .collect();
        let count = entries.len();
        self.index.rewrite(entries)?;
        info!(commits = count, "index rebuilt from commit log");
        Ok(count)
    }

    /// The content log (for reconstruction reads).
    pub fn contents(&self) -> &ContentStore {
        &self.contents
    }

    /// Current sizes of the content log, commit log, and index, in that
    /// order. Useful for asserting that failed operations mutated nothing.
    pub fn sizes(&self) -> (u64, u64, usize) {
        (self.contents.len(), self.log.len(), self.index.len())
    }
}

/// Digest the commit payload into its identifier.
///
/// Covers each file's path and content, the message, and the timestamp's
/// wire form, with NUL fences between fields so adjacent values cannot
/// run together.
fn commit_id(files: &[(String, Vec<u8>)], message: &str, timestamp: &Timestamp) -> CommitId {
    let mut hasher = blake3::Hasher::new();
    hasher.update(COMMIT_ID_DOMAIN);
    for (path, bytes) in files {
        hasher.update(path.as_bytes());
        hasher.update(b"\0");
        hasher.update(bytes);
        hasher.update(b"\0");
    }
    hasher.update(message.as_bytes());
    hasher.update(b"\0");
    hasher.update(timestamp.to_rfc3339().as_bytes());
    CommitId::from_hash(*hasher.finalize().as_bytes())
}
