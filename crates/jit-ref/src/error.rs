use std::path::PathBuf;

use crate::oid::ObjectId;

/// Error types for reference operations.
///
/// Absence of a reference is not an error; reads return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum RefError {
    #[error("invalid ref name: {0}")]
    InvalidName(String),

    #[error("branch '{0}' not found.")]
    NotFound(String),

    #[error("A branch named '{0}' already exists.")]
    AlreadyExists(String),

    #[error("the requested upstream branch '{0}' does not exist")]
    UpstreamNotFound(String),

    #[error("value of {name} changed since last read: expected {}, found {}", display_opt(.expected), display_opt(.actual))]
    StaleValue {
        name: String,
        expected: Option<ObjectId>,
        actual: Option<ObjectId>,
    },

    #[error("too many levels of symbolic refs: {0}")]
    SymrefLoop(String),

    #[error("directory-file conflict: cannot create ref '{name}' because '{conflict}' exists")]
    DirectoryConflict { name: String, conflict: String },

    #[error("lock file error: {0}")]
    Lock(#[from] jit_utils::LockError),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error on {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RefError {
    /// Did the write lose a race for the lock?
    pub fn is_locked(&self) -> bool {
        matches!(self, RefError::Lock(e) if e.is_contention())
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, RefError::StaleValue { .. })
    }
}

fn display_opt(oid: &Option<ObjectId>) -> String {
    match oid {
        Some(oid) => oid.to_string(),
        None => "nothing".to_string(),
    }
}
