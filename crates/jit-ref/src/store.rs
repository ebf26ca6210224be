use std::collections::HashMap;

use crate::error::RefError;
use crate::oid::ObjectId;
use crate::SymRef;

/// Read side of a reference store.
///
/// This is what history and decoration code depends on; writes stay on the
/// concrete backend. The default backend is `FilesRefStore`.
pub trait RefStore: Send + Sync {
    /// Resolve `HEAD` to an object id, following symbolic refs.
    fn read_head(&self) -> Result<Option<ObjectId>, RefError>;

    /// Resolve a short or full name. The first existing file among the
    /// store root, `refs/`, `refs/heads/` and `refs/remotes/` wins.
    fn read_ref(&self, name: &str) -> Result<Option<ObjectId>, RefError>;

    /// The last symbolic hop reachable from `source`: the branch `HEAD` is
    /// on, or `source` itself when it is not symbolic.
    fn current_ref(&self, source: &str) -> Result<SymRef, RefError>;

    /// `HEAD` followed by every ref under `refs/`, sorted by path.
    fn list_all_refs(&self) -> Result<Vec<SymRef>, RefError>;

    fn list_branches(&self) -> Result<Vec<SymRef>, RefError>;

    fn list_remotes(&self) -> Result<Vec<SymRef>, RefError>;

    /// Display name for a ref path: relative to `refs/remotes/`,
    /// `refs/heads/` or the store root, whichever contains it first.
    fn short_name(&self, path: &str) -> String;

    /// Canonical path, relative to the store root, for a short or full name.
    fn long_name(&self, name: &str) -> Result<String, RefError>;

    /// Map each object id to every ref that currently resolves to it.
    ///
    /// Refs that resolve to nothing (unborn branches, dangling or looping
    /// symbolic refs) are left out. I/O and parse failures still propagate.
    fn reverse_refs(&self) -> Result<HashMap<ObjectId, Vec<SymRef>>, RefError> {
        let mut table: HashMap<ObjectId, Vec<SymRef>> = HashMap::new();

        for r in self.list_all_refs()? {
            let oid = match self.read_ref(r.path()) {
                Ok(Some(oid)) => oid,
                Ok(None) | Err(RefError::SymrefLoop(_)) => continue,
                Err(e) => return Err(e),
            };
            table.entry(oid).or_default().push(r);
        }

        Ok(table)
    }
}
