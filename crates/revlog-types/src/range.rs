use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Validated half-open byte range `[start, end)` into an append-only log.
///
/// Ranges are the only way offsets travel between components: every append
/// returns one, every read takes one. The constructor enforces
/// `start <= end`, so a `ByteRange` in hand is always well-formed — whether
/// it lies within a given log is checked at read time against the log's
/// physical size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    start: u64,
    end: u64,
}

impl ByteRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: u64, end: u64) -> Result<Self, TypeError> {
        if start > end {
            return Err(TypeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create the range covering `len` bytes starting at `start`.
    pub fn at(start: u64, len: u64) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// First byte covered (inclusive).
    pub fn start(&self) -> u64 {
        self.start
    }

    /// One past the last byte covered (exclusive).
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of bytes covered.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Returns `true` if the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_ordered_bounds() {
        let range = ByteRange::new(3, 7).unwrap();
        assert_eq!(range.start(), 3);
        assert_eq!(range.end(), 7);
        assert_eq!(range.len(), 4);
        assert!(!range.is_empty());
    }

    #[test]
    fn new_accepts_empty_range() {
        let range = ByteRange::new(5, 5).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert!(matches!(
            ByteRange::new(7, 3),
            Err(TypeError::InvalidRange { start: 7, end: 3 })
        ));
    }

    #[test]
    fn at_covers_len_bytes() {
        let range = ByteRange::at(10, 4);
        assert_eq!(range.start(), 10);
        assert_eq!(range.end(), 14);
    }

    #[test]
    fn display_is_half_open() {
        let range = ByteRange::at(0, 5);
        assert_eq!(format!("{range}"), "[0, 5)");
    }

    #[test]
    fn serde_roundtrip() {
        let range = ByteRange::at(42, 100);
        let json = serde_json::to_string(&range).unwrap();
        let parsed: ByteRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);
    }
}
