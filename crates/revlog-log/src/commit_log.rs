use std::path::Path;

use tracing::warn;

use revlog_store::AppendLog;
use revlog_types::{ByteRange, Commit};

use crate::error::LogResult;
use crate::record;

/// Blank line written after every record; never part of an indexed range.
const RECORD_SEPARATOR: &[u8] = b"\n";

/// The commit log: serialized commit records appended to a single file.
///
/// Each append returns the range occupied by the record itself; the blank
/// separator line that follows sits in the one-byte gap between ranges.
/// Records are write-once — the log only grows.
#[derive(Debug)]
pub struct CommitLog {
    log: AppendLog,
}

impl CommitLog {
    /// Open (or create) the commit log at the given path.
    pub fn open(path: &Path) -> LogResult<Self> {
        Ok(Self {
            log: AppendLog::open(path)?,
        })
    }

    /// Append one commit record, returning the range it occupies.
    pub fn append(&mut self, commit: &Commit) -> LogResult<ByteRange> {
        let bytes = record::encode(commit);
        let range = self.log.append(&bytes)?;
        self.log.append(RECORD_SEPARATOR)?;
        Ok(range)
    }

    /// Read and parse the record in `range`.
    pub fn read(&self, range: ByteRange) -> LogResult<Commit> {
        let bytes = self.log.read(range)?;
        record::decode(&bytes, range.start())
    }

    /// Current size of the commit log in bytes.
    pub fn len(&self) -> u64 {
        self.log.len()
    }

    /// Returns `true` if no commit has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Replay the whole log front-to-back, recomputing every record range.
    ///
    /// Records are delimited by the blank separator line. A truncated or
    /// unparseable record at the tail — the signature of a torn write — is
    /// logged and excluded, along with anything after it; everything before
    /// it is returned. This is the recovery path the index is rebuilt from.
    pub fn scan(&self) -> LogResult<Vec<(ByteRange, Commit)>> {
        let bytes = self.log.read(ByteRange::at(0, self.log.len()))?;
        let mut records = Vec::new();
        let mut pos = 0usize;

        while pos < bytes.len() {
            let Some(separator) = find_separator(&bytes[pos..]) else {
                warn!(offset = pos, "truncated record at commit log tail; stopping scan");
                break;
            };
            // The record runs through the first newline of the blank-line
            // pair; the second newline is the separator.
            let end = pos + separator + 1;
            let range = ByteRange::at(pos as u64, (end - pos) as u64);

            match record::decode(&bytes[pos..end], pos as u64) {
                Ok(commit) => records.push((range, commit)),
                Err(e) => {
                    warn!(offset = pos, error = %e, "unparseable commit record; stopping scan");
                    break;
                }
            }
            pos = end + 1;
        }

        Ok(records)
    }
}

/// Position of the `\n\n` record boundary within `bytes`, if any.
fn find_separator(bytes: &[u8]) -> Option<usize> {
    bytes.windows(2).position(|pair| pair == b"\n\n")
}
