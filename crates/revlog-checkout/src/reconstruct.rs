use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use revlog_log::CommitStore;
use revlog_types::{Commit, CommitId};

use crate::error::{CheckoutError, CheckoutResult};

/// One file re-materialized from the content log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaterializedFile {
    /// Work-tree-relative path the file was committed under.
    pub path: String,
    /// The file's bytes exactly as committed.
    #[serde(with = "lossy_bytes")]
    pub bytes: Vec<u8>,
}

/// A fully reconstructed commit: its record plus every referenced file's
/// bytes, in commit order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub commit: Commit,
    pub files: Vec<MaterializedFile>,
}

/// Rebuilds commit snapshots out of the three logs.
pub struct Reconstructor<'a> {
    store: &'a CommitStore,
}

impl<'a> Reconstructor<'a> {
    /// A reconstructor over the given store.
    pub fn new(store: &'a CommitStore) -> Self {
        Self { store }
    }

    /// Reconstruct the commit with the given identifier.
    pub fn reconstruct(&self, id: &CommitId) -> CheckoutResult<Snapshot> {
        let entry = self.store.lookup(id)?;
        self.materialize(self.store.read_commit(&entry)?)
    }

    /// Reconstruct by identifier string or unique-enough hex prefix.
    pub fn reconstruct_ref(&self, spec: &str) -> CheckoutResult<Snapshot> {
        let entry = self.store.resolve(spec)?;
        self.materialize(self.store.read_commit(&entry)?)
    }

    /// Reconstruct the most recent commit.
    pub fn latest(&self) -> CheckoutResult<Snapshot> {
        let entry = self.store.latest().ok_or(CheckoutError::NoCommits)?;
        self.materialize(self.store.read_commit(&entry)?)
    }

    fn materialize(&self, commit: Commit) -> CheckoutResult<Snapshot> {
        let mut files = Vec::with_capacity(commit.files.len());
        for file_ref in &commit.files {
            let bytes = self.store.contents().read(file_ref.range)?;
            debug!(path = %file_ref.path, len = bytes.len(), "file rematerialized");
            files.push(MaterializedFile {
                path: file_ref.path.clone(),
                bytes,
            });
        }
        Ok(Snapshot { commit, files })
    }

    /// Write a snapshot's files into the work dir.
    ///
    /// Every destination is unconditionally overwritten; parent
    /// directories are created as needed. Returns the written paths.
    pub fn checkout(&self, snapshot: &Snapshot, workdir: &Path) -> CheckoutResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(snapshot.files.len());
        for file in &snapshot.files {
            let dest = workdir.join(&file.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &file.bytes)?;
            written.push(dest);
        }
        info!(
            id = %snapshot.commit.id.short_hex(),
            files = written.len(),
            "checkout complete"
        );
        Ok(written)
    }

    /// Render a snapshot — commit metadata, then each file — to a writer.
    ///
    /// The work tree is never touched.
    pub fn show<W: Write>(&self, snapshot: &Snapshot, out: &mut W) -> CheckoutResult<()> {
        writeln!(out, "commit {}", snapshot.commit.id)?;
        writeln!(out, "Date: {}", snapshot.commit.timestamp.to_display())?;
        writeln!(out)?;
        writeln!(out, "    {}", snapshot.commit.message)?;
        for file in &snapshot.files {
            writeln!(out)?;
            writeln!(out, "--- {} ({} bytes)", file.path, file.bytes.len())?;
            out.write_all(&file.bytes)?;
            if !file.bytes.ends_with(b"\n") {
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Serialize file bytes as a (lossy) string for JSON output.
mod lossy_bytes {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }
}
