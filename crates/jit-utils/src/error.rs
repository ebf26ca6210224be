use std::path::PathBuf;

/// Lock file errors.
///
/// `AlreadyLocked` and `MissingParent` are the two conditions callers are
/// expected to tell apart: the first must be surfaced, the second may be
/// recovered by creating the directory and acquiring again.
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("unable to create lock file '{path}': already locked")]
    AlreadyLocked { path: PathBuf },

    #[error("unable to create lock file '{path}': parent directory does not exist")]
    MissingParent { path: PathBuf },

    #[error("unable to create lock file '{path}': {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to commit lock file '{path}': {source}")]
    Commit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to remove lock file '{path}': {source}")]
    Rollback {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LockError {
    /// Another writer holds the marker.
    pub fn is_contention(&self) -> bool {
        matches!(self, LockError::AlreadyLocked { .. })
    }

    /// The target's containing directory does not exist.
    pub fn is_missing_parent(&self) -> bool {
        matches!(self, LockError::MissingParent { .. })
    }
}
