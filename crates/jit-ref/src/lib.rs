//! Reference store for the jit version-control tool.
//!
//! Maps human-readable names (`HEAD`, `main`, `refs/heads/topic`) to object
//! ids, and makes every change to that mapping crash-safe and safe under
//! concurrent processes. Each mutation goes through a [`jit_utils::LockFile`]
//! on the exact path being changed; reads take no lock and rely on
//! [`FilesRefStore::compare_and_swap`] to detect values that moved underneath
//! them.
//!
//! The files backend (`FilesRefStore`) stores one reference per file under
//! the store root. The read side is also exposed as the [`RefStore`] trait so
//! history and decoration code can take `&dyn RefStore`.

pub mod decorate;
mod error;
pub mod files;
mod name;
mod oid;
mod store;

use std::fmt;

pub use decorate::{DecorateMode, Decorator};
pub use error::RefError;
pub use files::FilesRefStore;
pub use name::RefName;
pub use oid::ObjectId;
pub use store::RefStore;

pub const HEAD: &str = "HEAD";
pub const ORIG_HEAD: &str = "ORIG_HEAD";

pub const REFS_DIR: &str = "refs";
pub const HEADS_DIR: &str = "refs/heads";
pub const REMOTES_DIR: &str = "refs/remotes";

/// Branch that `HEAD` points at in a freshly initialised repository.
pub const DEFAULT_BRANCH: &str = "main";

/// Maximum depth for following symbolic ref chains.
pub const MAX_SYMREF_DEPTH: usize = 10;

/// The content of a reference file that exists.
///
/// A missing file is represented as `None` by every API that reads one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefValue {
    /// Literal object id.
    Direct(ObjectId),
    /// `ref: <path>`, pointing at another reference.
    Symbolic(RefName),
}

impl RefValue {
    pub fn symbolic(target: &str) -> Result<Self, RefError> {
        Ok(RefValue::Symbolic(RefName::new(target)?))
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, RefValue::Symbolic(_))
    }

    pub fn as_oid(&self) -> Option<&ObjectId> {
        match self {
            RefValue::Direct(oid) => Some(oid),
            RefValue::Symbolic(_) => None,
        }
    }
}

impl From<ObjectId> for RefValue {
    fn from(oid: ObjectId) -> Self {
        RefValue::Direct(oid)
    }
}

/// Renders the file content, without the trailing newline.
impl fmt::Display for RefValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefValue::Direct(oid) => write!(f, "{}", oid),
            RefValue::Symbolic(target) => write!(f, "ref: {}", target),
        }
    }
}

/// A handle on a named reference path, as produced by listing and by
/// [`RefStore::current_ref`]. It does not hold a value; read it through a
/// store when needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymRef {
    name: RefName,
}

impl SymRef {
    pub fn new(name: RefName) -> Self {
        Self { name }
    }

    pub(crate) fn head() -> Self {
        Self::new(RefName::new_unchecked(HEAD))
    }

    pub fn name(&self) -> &RefName {
        &self.name
    }

    /// Path relative to the store root.
    pub fn path(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_head(&self) -> bool {
        self.name.is_head()
    }

    pub fn is_branch(&self) -> bool {
        self.name.is_branch()
    }

    pub fn is_remote(&self) -> bool {
        self.name.is_remote()
    }

    /// Resolve this path to an object id through `store`.
    pub fn read_oid(&self, store: &dyn RefStore) -> Result<Option<ObjectId>, RefError> {
        store.read_ref(self.path())
    }

    pub fn short_name(&self, store: &dyn RefStore) -> String {
        store.short_name(self.path())
    }
}

impl fmt::Display for SymRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}
