use std::path::Path;

use revlog_types::ByteRange;

use crate::error::StoreResult;
use crate::log::AppendLog;

/// The content log: raw concatenated file bytes, addressed by byte range.
///
/// No length headers are embedded — boundaries exist only in the file
/// references recorded alongside each commit. Every range is write-once:
/// the store holds whatever bytes a file had at commit time, forever.
#[derive(Debug)]
pub struct ContentStore {
    log: AppendLog,
}

impl ContentStore {
    /// Open (or create) the content log at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        Ok(Self {
            log: AppendLog::open(path)?,
        })
    }

    /// Append one file's bytes, returning the range they occupy.
    pub fn append(&mut self, bytes: &[u8]) -> StoreResult<ByteRange> {
        self.log.append(bytes)
    }

    /// Read back exactly the bytes in `range`.
    pub fn read(&self, range: ByteRange) -> StoreResult<Vec<u8>> {
        self.log.read(range)
    }

    /// Current size of the content log in bytes.
    pub fn len(&self) -> u64 {
        self.log.len()
    }

    /// Returns `true` if no content has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        self.log.path()
    }
}
