use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use revlog_types::{ByteRange, CommitId, IndexEntry};

use crate::error::{LogError, LogResult};

/// The commit index: `<id> <start> <end>` triples, one line per commit, in
/// commit order.
///
/// The index exists to avoid a full commit-log scan per lookup. It is an
/// advisory cache of the commit log: a lost or torn index is rebuilt by
/// replaying the log (see [`CommitStore::rebuild_index`]), so open-time
/// parsing skips unreadable lines instead of failing.
///
/// Lookups use first-match semantics: the earliest entry with a matching
/// identifier wins.
///
/// [`CommitStore::rebuild_index`]: crate::CommitStore::rebuild_index
#[derive(Debug)]
pub struct CommitIndex {
    path: PathBuf,
    entries: Vec<IndexEntry>,
}

impl CommitIndex {
    /// Open the index file, loading all parseable entries.
    ///
    /// The file is created if missing. A malformed line — the signature of
    /// a torn index append — is logged and skipped.
    pub fn open(path: &Path) -> LogResult<Self> {
        OpenOptions::new().create(true).append(true).open(path)?;

        let mut entries = Vec::new();
        for (lineno, line) in fs::read_to_string(path)?.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    warn!(line = lineno + 1, error = %e, "skipping malformed index line");
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Append one entry to the index.
    pub fn append(&mut self, entry: IndexEntry) -> LogResult<()> {
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(
            file,
            "{} {} {}",
            entry.id.to_hex(),
            entry.range.start(),
            entry.range.end()
        )?;
        self.entries.push(entry);
        Ok(())
    }

    /// All entries, in commit order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of indexed commits.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no commit has been indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently indexed entry.
    pub fn latest(&self) -> Option<&IndexEntry> {
        self.entries.last()
    }

    /// Find the first entry whose identifier matches exactly.
    pub fn lookup(&self, id: &CommitId) -> LogResult<IndexEntry> {
        self.entries
            .iter()
            .find(|entry| entry.id == *id)
            .copied()
            .ok_or_else(|| LogError::HashNotFound(id.to_hex()))
    }

    /// Find the first entry whose hex identifier starts with `prefix`.
    ///
    /// A full-length identifier resolves exactly; shorter prefixes are a
    /// convenience for humans. First match wins, like [`lookup`].
    ///
    /// [`lookup`]: CommitIndex::lookup
    pub fn resolve(&self, prefix: &str) -> LogResult<IndexEntry> {
        if prefix.is_empty() {
            return Err(LogError::HashNotFound(prefix.to_string()));
        }
        self.entries
            .iter()
            .find(|entry| entry.id.to_hex().starts_with(prefix))
            .copied()
            .ok_or_else(|| LogError::HashNotFound(prefix.to_string()))
    }

    /// Replace the whole index with the given entries.
    ///
    /// Used by recovery after replaying the commit log.
    pub fn rewrite(&mut self, entries: Vec<IndexEntry>) -> LogResult<()> {
        let mut out = String::new();
        for entry in &entries {
            out.push_str(&format!(
                "{} {} {}\n",
                entry.id.to_hex(),
                entry.range.start(),
                entry.range.end()
            ));
        }
        fs::write(&self.path, out)?;
        debug!(entries = entries.len(), "index rewritten");
        self.entries = entries;
        Ok(())
    }
}

/// Parse one `<id> <start> <end>` index line.
fn parse_line(line: &str) -> LogResult<IndexEntry> {
    let mut fields = line.split_whitespace();
    let (Some(id), Some(start), Some(end), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(LogError::Parse {
            offset: 0,
            reason: format!("expected 3 index fields: {line:?}"),
        });
    };

    let id = CommitId::from_hex(id)?;
    let start: u64 = start.parse().map_err(|_| LogError::Parse {
        offset: 0,
        reason: format!("bad start offset in index line: {line:?}"),
    })?;
    let end: u64 = end.parse().map_err(|_| LogError::Parse {
        offset: 0,
        reason: format!("bad end offset in index line: {line:?}"),
    })?;

    Ok(IndexEntry::new(id, ByteRange::new(start, end)?))
}
