use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use revlog_checkout::{CheckoutError, Reconstructor, Snapshot};
use revlog_log::{CommitStore, LogError};
use revlog_stage::{StageError, StagingArea};
use revlog_types::{Commit, Layout};

/// Errors surfaced by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("repository already initialized at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("repository not initialized (run `revlog init`)")]
    NotInitialized,

    #[error("nothing staged")]
    EmptyStage,

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// A repository: one work dir, one [`Layout`], and the components wired
/// over it.
///
/// Every operation validates before it mutates: a failed `add` or `commit`
/// leaves all four logs exactly as they were.
#[derive(Debug)]
pub struct Repository {
    workdir: PathBuf,
    layout: Layout,
    stage: StagingArea,
    store: CommitStore,
}

impl Repository {
    /// Create the layout directory and the four logs, empty.
    ///
    /// Fails with [`RepoError::AlreadyInitialized`] if the layout root
    /// already exists.
    pub fn init(workdir: &Path) -> RepoResult<Self> {
        let layout = Layout::in_workdir(workdir);
        if layout.root().exists() {
            return Err(RepoError::AlreadyInitialized(layout.root().to_path_buf()));
        }

        fs::create_dir_all(layout.root())?;
        for path in layout.log_paths() {
            fs::write(path, b"")?;
        }
        info!(root = %layout.root().display(), "repository initialized");

        Self::open(workdir)
    }

    /// Open an existing repository.
    ///
    /// Fails with [`RepoError::NotInitialized`] unless the layout root and
    /// all four logs exist.
    pub fn open(workdir: &Path) -> RepoResult<Self> {
        let layout = Layout::in_workdir(workdir);
        if !layout.is_initialized() {
            return Err(RepoError::NotInitialized);
        }

        let stage = StagingArea::open(&layout.stage_path(), workdir)?;
        let store = CommitStore::open(&layout)?;

        Ok(Self {
            workdir: workdir.to_path_buf(),
            layout,
            stage,
            store,
        })
    }

    /// Stage one path for the next commit.
    pub fn add(&mut self, path: &str) -> RepoResult<()> {
        self.stage.add(path)?;
        Ok(())
    }

    /// Record the staged files as a new commit and drain the stage.
    ///
    /// Fails with [`RepoError::EmptyStage`] before touching any log if
    /// nothing is staged. The stage is cleared only after the commit is
    /// durably recorded.
    pub fn commit(&mut self, message: &str) -> RepoResult<Commit> {
        if self.stage.is_empty() {
            return Err(RepoError::EmptyStage);
        }

        let mut files = Vec::with_capacity(self.stage.len());
        for path in self.stage.list() {
            let bytes = fs::read(self.workdir.join(path))?;
            files.push((path.clone(), bytes));
        }

        let commit = self.store.create_commit(message, &files)?;
        self.stage.clear()?;
        Ok(commit)
    }

    /// All commits, most recent first.
    pub fn log(&self) -> RepoResult<Vec<Commit>> {
        Ok(self.store.list_all()?)
    }

    /// Reconstruct a commit by identifier/prefix, or the most recent one.
    pub fn snapshot(&self, spec: Option<&str>) -> RepoResult<Snapshot> {
        let reconstructor = Reconstructor::new(&self.store);
        let snapshot = match spec {
            Some(spec) => reconstructor.reconstruct_ref(spec)?,
            None => reconstructor.latest()?,
        };
        Ok(snapshot)
    }

    /// Materialize a commit's files into the work dir, overwriting.
    pub fn checkout(&self, spec: Option<&str>) -> RepoResult<Vec<PathBuf>> {
        let snapshot = self.snapshot(spec)?;
        let written = Reconstructor::new(&self.store).checkout(&snapshot, &self.workdir)?;
        Ok(written)
    }

    /// Render a commit and its contents to a writer; disk is untouched.
    pub fn show<W: Write>(&self, spec: &str, out: &mut W) -> RepoResult<Snapshot> {
        let snapshot = self.snapshot(Some(spec))?;
        Reconstructor::new(&self.store).show(&snapshot, out)?;
        Ok(snapshot)
    }

    /// Rebuild the commit index by replaying the commit log.
    pub fn fsck(&mut self) -> RepoResult<usize> {
        Ok(self.store.rebuild_index()?)
    }

    /// The staging area.
    pub fn stage(&self) -> &StagingArea {
        &self.stage
    }

    /// The commit store.
    pub fn store(&self) -> &CommitStore {
        &self.store
    }

    /// The repository layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}
