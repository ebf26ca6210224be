//! Branch lifecycle on top of the files backend.

use std::fs;

use jit_utils::{LockError, LockFile};

use super::{loose, FilesRefStore};
use crate::error::RefError;
use crate::name::RefName;
use crate::oid::ObjectId;
use crate::{RefValue, HEADS_DIR};

impl FilesRefStore {
    /// Create `refs/heads/<branch_name>` pointing at `start_oid`.
    ///
    /// Fails with [`RefError::InvalidName`] if the name does not pass
    /// [`RefName::is_valid`], and with [`RefError::AlreadyExists`] if the
    /// branch file is already there, whether found before or after taking
    /// the lock.
    pub fn create_branch(&self, branch_name: &str, start_oid: &ObjectId) -> Result<(), RefError> {
        if !RefName::is_valid(branch_name) {
            return Err(RefError::InvalidName(format!(
                "'{}' is not a valid branch name.",
                branch_name
            )));
        }

        let name = RefName::new_unchecked(format!("{}/{}", HEADS_DIR, branch_name));
        let path = self.path_of(&name);

        if path.is_file() {
            return Err(RefError::AlreadyExists(branch_name.to_string()));
        }
        if let Some(conflict) = loose::find_dir_file_conflict(self.root(), &name) {
            return Err(RefError::DirectoryConflict {
                name: name.to_string(),
                conflict,
            });
        }

        let value = RefValue::Direct(start_oid.clone());
        self.update_ref_file(&name, Some(&value), || {
            if path.is_file() {
                return Err(RefError::AlreadyExists(branch_name.to_string()));
            }
            Ok(())
        })?;

        tracing::debug!(branch = branch_name, oid = %start_oid, "branch created");
        Ok(())
    }

    /// Delete `refs/heads/<branch_name>` and return the object id it held.
    ///
    /// Parent directories left empty are pruned, stopping below
    /// `refs/heads`. The lock is rolled back rather than committed: the
    /// deletion itself is the change.
    pub fn delete_branch(&self, branch_name: &str) -> Result<ObjectId, RefError> {
        let not_found = || RefError::NotFound(branch_name.to_string());

        let name = RefName::branch(branch_name)?;
        let path = self.path_of(&name);

        let mut lock = match LockFile::acquire(&path) {
            Ok(lock) => lock,
            Err(LockError::MissingParent { .. }) => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };

        let oid = self.read_symref(&name, 0)?.ok_or_else(not_found)?;

        fs::remove_file(&path).map_err(|e| RefError::IoPath {
            path: path.clone(),
            source: e,
        })?;
        // Release the marker first so it does not keep the directory non-empty
        lock.rollback()?;
        loose::delete_parent_directories(&path, &self.root().join(HEADS_DIR));

        tracing::debug!(branch = branch_name, oid = %oid, "branch deleted");
        Ok(oid)
    }
}
