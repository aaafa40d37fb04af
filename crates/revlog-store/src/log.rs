use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use revlog_types::ByteRange;

use crate::error::{StoreError, StoreResult};

/// An append-only byte log backed by a single file.
///
/// The write offset is tracked in one place, initialized from the file's
/// length at open and advanced by exactly the number of bytes written.
/// Every append returns the half-open [`ByteRange`] it occupied; ranges
/// from successive appends never overlap and grow strictly forward.
///
/// Reads open the file independently of the writer, so any previously
/// returned range can be read back at any time.
#[derive(Debug)]
pub struct AppendLog {
    path: PathBuf,
    file: File,
    /// Current end-of-log position; the start of the next append.
    offset: u64,
}

impl AppendLog {
    /// Open (or create) the log file at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let offset = file.metadata()?.len();

        Ok(Self {
            path: path.to_path_buf(),
            file,
            offset,
        })
    }

    /// Append bytes at the current end-of-log position.
    ///
    /// Returns the range `[start, start + bytes.len())` the bytes occupy.
    /// The returned range never overlaps any previously returned range.
    pub fn append(&mut self, bytes: &[u8]) -> StoreResult<ByteRange> {
        let range = ByteRange::at(self.offset, bytes.len() as u64);

        self.file.write_all(bytes)?;
        self.file.flush()?;
        self.offset = range.end();

        debug!(path = %self.path.display(), start = range.start(), len = range.len(), "log append");
        Ok(range)
    }

    /// Read back exactly the bytes in `range`.
    ///
    /// Fails with [`StoreError::OutOfRange`] if the range extends past the
    /// current physical size of the log.
    pub fn read(&self, range: ByteRange) -> StoreResult<Vec<u8>> {
        if range.end() > self.offset {
            return Err(StoreError::OutOfRange {
                requested: range,
                len: self.offset,
            });
        }

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(range.start()))?;
        let mut buf = vec![0u8; range.len() as usize];
        file.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Current size of the log in bytes.
    pub fn len(&self) -> u64 {
        self.offset
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
