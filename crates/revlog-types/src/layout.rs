use std::path::{Path, PathBuf};

/// Directory name of the repository layout inside a work dir.
pub const REVLOG_DIR: &str = ".revlog";

/// The on-disk layout of a repository: one root directory holding the four
/// logs, one per concern.
///
/// A `Layout` is an explicit value passed into each component at
/// construction — nothing in the workspace hard-codes repository paths.
///
/// | file           | concern                                     |
/// |----------------|---------------------------------------------|
/// | `stage`        | newline-delimited staged paths               |
/// | `contents.log` | raw concatenated file bytes                  |
/// | `commits.log`  | structured text records, one per commit      |
/// | `commits.idx`  | `<id> <start> <end>` triples in commit order |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// A layout rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The conventional layout for a work dir: `<workdir>/.revlog`.
    pub fn in_workdir(workdir: &Path) -> Self {
        Self::new(workdir.join(REVLOG_DIR))
    }

    /// The layout's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the stage log.
    pub fn stage_path(&self) -> PathBuf {
        self.root.join("stage")
    }

    /// Path of the content log.
    pub fn contents_path(&self) -> PathBuf {
        self.root.join("contents.log")
    }

    /// Path of the commit log.
    pub fn commits_path(&self) -> PathBuf {
        self.root.join("commits.log")
    }

    /// Path of the commit index.
    pub fn index_path(&self) -> PathBuf {
        self.root.join("commits.idx")
    }

    /// All four log paths, in creation order.
    pub fn log_paths(&self) -> [PathBuf; 4] {
        [
            self.stage_path(),
            self.contents_path(),
            self.commits_path(),
            self.index_path(),
        ]
    }

    /// Returns `true` if the root directory and all four logs exist.
    pub fn is_initialized(&self) -> bool {
        self.root.is_dir() && self.log_paths().iter().all(|p| p.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_workdir_appends_revlog_dir() {
        let layout = Layout::in_workdir(Path::new("/tmp/project"));
        assert_eq!(layout.root(), Path::new("/tmp/project/.revlog"));
    }

    #[test]
    fn log_paths_live_under_root() {
        let layout = Layout::new("/repo/.revlog");
        for path in layout.log_paths() {
            assert!(path.starts_with("/repo/.revlog"));
        }
    }

    #[test]
    fn uninitialized_when_root_missing() {
        let layout = Layout::new("/definitely/not/a/real/dir/.revlog");
        assert!(!layout.is_initialized());
    }
}
