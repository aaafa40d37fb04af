//! Text codec for one commit record.
//!
//! Layout, one field per line:
//!
//! ```text
//! <identifier hex>
//! <timestamp rfc3339>
//! <path> <start> <end>     (zero or more)
//! <message>
//! ```
//!
//! The record ends with the newline after the message; the blank separator
//! line between records in the commit log is not part of the record.
//! File-reference lines are parsed from the right, so paths containing
//! spaces survive the round trip.

use revlog_types::{ByteRange, Commit, CommitId, FileRef, Timestamp};

use crate::error::{LogError, LogResult};

/// Serialize a commit into its record bytes.
pub fn encode(commit: &Commit) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(&commit.id.to_hex());
    out.push('\n');
    out.push_str(&commit.timestamp.to_rfc3339());
    out.push('\n');
    for file in &commit.files {
        out.push_str(&format!(
            "{} {} {}\n",
            file.path,
            file.range.start(),
            file.range.end()
        ));
    }
    out.push_str(&commit.message);
    out.push('\n');
    out.into_bytes()
}

/// Parse record bytes back into a commit.
///
/// `offset` is the record's position in the commit log, used only for
/// diagnostics. Fails with [`LogError::Parse`] when the bytes do not match
/// the field layout (missing lines, bad identifier or timestamp, malformed
/// file reference, truncated read).
pub fn decode(bytes: &[u8], offset: u64) -> LogResult<Commit> {
    let text = std::str::from_utf8(bytes).map_err(|_| LogError::Parse {
        offset,
        reason: "record is not valid UTF-8".to_string(),
    })?;

    let mut lines: Vec<&str> = text.split('\n').collect();
    // The record ends with a newline, so the final split element is empty.
    match lines.pop() {
        Some("") => {}
        _ => {
            return Err(LogError::Parse {
                offset,
                reason: "record does not end with a newline".to_string(),
            })
        }
    }
    if lines.len() < 3 {
        return Err(LogError::Parse {
            offset,
            reason: format!("expected at least 3 lines, got {}", lines.len()),
        });
    }

    let id = CommitId::from_hex(lines[0]).map_err(|e| LogError::Parse {
        offset,
        reason: format!("bad identifier line: {e}"),
    })?;
    let timestamp = Timestamp::from_rfc3339(lines[1]).map_err(|e| LogError::Parse {
        offset,
        reason: format!("bad timestamp line: {e}"),
    })?;

    let message_line = lines.len() - 1;
    let files = lines[2..message_line]
        .iter()
        .map(|line| decode_file_ref(line, offset))
        .collect::<LogResult<Vec<_>>>()?;
    let message = lines[message_line].to_string();

    Ok(Commit {
        id,
        timestamp,
        message,
        files,
    })
}

/// Parse one `<path> <start> <end>` line, splitting from the right.
fn decode_file_ref(line: &str, offset: u64) -> LogResult<FileRef> {
    let malformed = |reason: String| LogError::Parse { offset, reason };

    let mut fields = line.rsplitn(3, ' ');
    let end = fields
        .next()
        .ok_or_else(|| malformed(format!("empty file reference line: {line:?}")))?;
    let start = fields
        .next()
        .ok_or_else(|| malformed(format!("file reference missing offsets: {line:?}")))?;
    let path = fields
        .next()
        .ok_or_else(|| malformed(format!("file reference missing path: {line:?}")))?;

    let start: u64 = start
        .parse()
        .map_err(|_| malformed(format!("bad start offset in file reference: {line:?}")))?;
    let end: u64 = end
        .parse()
        .map_err(|_| malformed(format!("bad end offset in file reference: {line:?}")))?;
    let range = ByteRange::new(start, end)
        .map_err(|e| malformed(format!("bad range in file reference: {e}")))?;

    Ok(FileRef::new(path, range))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_commit(files: Vec<FileRef>) -> Commit {
        Commit {
            id: CommitId::from_bytes(b"record tests"),
            timestamp: Timestamp::from_rfc3339("2024-03-01T12:00:00Z").unwrap(),
            message: "add things".to_string(),
            files,
        }
    }

    #[test]
    fn roundtrip_with_files() {
        let commit = sample_commit(vec![
            FileRef::new("a.txt", ByteRange::at(0, 5)),
            FileRef::new("dir/b.txt", ByteRange::at(5, 11)),
        ]);
        let bytes = encode(&commit);
        let decoded = decode(&bytes, 0).unwrap();
        assert_eq!(commit, decoded);
    }

    #[test]
    fn roundtrip_without_files() {
        let commit = sample_commit(vec![]);
        let decoded = decode(&encode(&commit), 0).unwrap();
        assert_eq!(commit, decoded);
    }

    #[test]
    fn paths_with_spaces_survive() {
        let commit = sample_commit(vec![FileRef::new(
            "notes from march.txt",
            ByteRange::at(3, 9),
        )]);
        let decoded = decode(&encode(&commit), 0).unwrap();
        assert_eq!(decoded.files[0].path, "notes from march.txt");
        assert_eq!(decoded.files[0].range, ByteRange::at(3, 9));
    }

    #[test]
    fn message_with_spaces_survives() {
        let mut commit = sample_commit(vec![]);
        commit.message = "a message with several words".to_string();
        let decoded = decode(&encode(&commit), 0).unwrap();
        assert_eq!(decoded.message, commit.message);
    }

    #[test]
    fn truncated_record_is_a_parse_error() {
        let commit = sample_commit(vec![FileRef::new("a.txt", ByteRange::at(0, 5))]);
        let bytes = encode(&commit);
        let err = decode(&bytes[..bytes.len() / 2], 0).unwrap_err();
        assert!(matches!(err, LogError::Parse { .. }));
    }

    #[test]
    fn bad_identifier_line_is_a_parse_error() {
        let bytes = b"not-hex\n2024-03-01T12:00:00Z\nmsg\n";
        let err = decode(bytes, 7).unwrap_err();
        match err {
            LogError::Parse { offset, reason } => {
                assert_eq!(offset, 7);
                assert!(reason.contains("identifier"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_timestamp_line_is_a_parse_error() {
        let id = CommitId::from_bytes(b"x").to_hex();
        let bytes = format!("{id}\nyesterday\nmsg\n");
        let err = decode(bytes.as_bytes(), 0).unwrap_err();
        assert!(matches!(err, LogError::Parse { .. }));
    }

    #[test]
    fn malformed_file_reference_is_a_parse_error() {
        let id = CommitId::from_bytes(b"x").to_hex();
        let bytes = format!("{id}\n2024-03-01T12:00:00Z\na.txt zero five\nmsg\n");
        let err = decode(bytes.as_bytes(), 0).unwrap_err();
        assert!(matches!(err, LogError::Parse { .. }));
    }

    #[test]
    fn non_utf8_record_is_a_parse_error() {
        let err = decode(&[0xff, 0xfe, 0x00], 0).unwrap_err();
        assert!(matches!(err, LogError::Parse { .. }));
    }
}
