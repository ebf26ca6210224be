mod branch;
pub(crate) mod loose;

use std::fs;
use std::path::{Path, PathBuf};

use jit_utils::{LockError, LockFile};

use crate::error::RefError;
use crate::name::RefName;
use crate::oid::ObjectId;
use crate::store::RefStore;
use crate::{RefValue, SymRef, HEAD, HEADS_DIR, MAX_SYMREF_DEPTH, REFS_DIR, REMOTES_DIR};

/// Roots tried, in order, when a caller passes a possibly-short name.
const SEARCH_PREFIXES: [&str; 4] = ["", REFS_DIR, HEADS_DIR, REMOTES_DIR];

/// Files-backend ref store.
///
/// One file per reference under `root` (usually `.git`). Every write takes a
/// lock on exactly the file it changes and commits through an atomic
/// rename; reads never lock.
#[derive(Debug, Clone)]
pub struct FilesRefStore {
    root: PathBuf,
    max_symref_depth: usize,
}

impl FilesRefStore {
    /// Create a new files-based ref store rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            max_symref_depth: MAX_SYMREF_DEPTH,
        }
    }

    /// Override how many symbolic hops are followed before giving up.
    pub fn with_max_symref_depth(mut self, depth: usize) -> Self {
        self.max_symref_depth = depth;
        self
    }

    /// Get the store root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The branch a new repository's `HEAD` points at.
    pub fn default_ref(&self) -> SymRef {
        SymRef::new(RefName::new_unchecked(format!(
            "{}/{}",
            HEADS_DIR,
            crate::DEFAULT_BRANCH
        )))
    }

    fn path_of(&self, name: &RefName) -> PathBuf {
        self.root.join(name.as_str())
    }

    fn head_name() -> RefName {
        RefName::new_unchecked(HEAD)
    }

    /// Rewrite `HEAD`, following any symbolic chain and writing at its end.
    ///
    /// Returns the object id the terminal hop held before the write. A
    /// symbolic value that would point back into the chain fails with
    /// [`RefError::SymrefLoop`].
    pub fn update_head(&self, value: &RefValue) -> Result<Option<ObjectId>, RefError> {
        self.update_symref(&Self::head_name(), value, &mut Vec::new())
    }

    /// Point `HEAD` at branch `revision` if it exists, otherwise detach it
    /// at `oid`.
    pub fn set_head(&self, revision: &str, oid: &ObjectId) -> Result<(), RefError> {
        let value = match RefName::branch(revision) {
            Ok(branch) if self.path_of(&branch).is_file() => RefValue::Symbolic(branch),
            _ => RefValue::Direct(oid.clone()),
        };
        self.update_ref_file(&Self::head_name(), Some(&value), || Ok(()))
    }

    /// Write a direct value at `name`; `None` removes the file.
    pub fn update_ref(&self, name: &str, oid: Option<&ObjectId>) -> Result<(), RefError> {
        let name = RefName::new(name)?;
        let value = oid.cloned().map(RefValue::Direct);
        self.update_ref_file(&name, value.as_ref(), || Ok(()))
    }

    /// Replace the value at `name` with `new_oid` only if it still resolves
    /// to `old_oid`. The comparison happens while holding the lock, so a
    /// concurrent writer either blocks this call with lock contention or
    /// makes it fail with [`RefError::StaleValue`].
    ///
    /// `None` as `old_oid` expects the ref to be absent; `None` as `new_oid`
    /// deletes it.
    pub fn compare_and_swap(
        &self,
        name: &str,
        old_oid: Option<&ObjectId>,
        new_oid: Option<&ObjectId>,
    ) -> Result<(), RefError> {
        let name = RefName::new(name)?;
        let value = new_oid.cloned().map(RefValue::Direct);

        self.update_ref_file(&name, value.as_ref(), || {
            let actual = self.read_symref(&name, 0)?;
            if actual.as_ref() != old_oid {
                tracing::debug!(name = %name, "compare-and-swap saw a stale value");
                return Err(RefError::StaleValue {
                    name: name.to_string(),
                    expected: old_oid.cloned(),
                    actual,
                });
            }
            Ok(())
        })
    }

    /// The value stored at `name` itself, without following symbolic hops.
    pub fn read_raw(&self, name: &str) -> Result<Option<RefValue>, RefError> {
        let name = RefName::new(name)?;
        loose::read_value(&self.path_of(&name))
    }

    /// Make `name` a symbolic ref to `target`, replacing whatever it held.
    ///
    /// Unlike [`update_head`](Self::update_head) this never follows an
    /// existing chain: the write lands on `name`.
    pub fn write_symbolic_ref(&self, name: &str, target: &str) -> Result<(), RefError> {
        let name = RefName::new(name)?;
        let value = RefValue::symbolic(target)?;
        self.update_ref_file(&name, Some(&value), || Ok(()))
    }

    /// Acquire the lock for `path`, creating its directory and trying once
    /// more if that directory is missing.
    fn lock_for_update(&self, path: &Path) -> Result<LockFile, RefError> {
        match LockFile::acquire(path) {
            Err(LockError::MissingParent { .. }) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| RefError::IoPath {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                    tracing::debug!(dir = %parent.display(), "created missing ref directory");
                }
                Ok(LockFile::acquire(path)?)
            }
            other => Ok(other?),
        }
    }

    /// The single write path: lock, run `check` under the lock, then commit
    /// `value` or remove the file when `value` is `None`. Any early return
    /// drops the lock, which rolls it back.
    fn update_ref_file(
        &self,
        name: &RefName,
        value: Option<&RefValue>,
        check: impl FnOnce() -> Result<(), RefError>,
    ) -> Result<(), RefError> {
        let path = self.path_of(name);
        let mut lock = self.lock_for_update(&path)?;
        check()?;

        match value {
            Some(value) => {
                loose::write_value(&mut lock, value)?;
                lock.commit()?;
                tracing::debug!(name = %name, value = %value, "ref updated");
            }
            None => {
                match fs::remove_file(&path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(RefError::IoPath { path, source: e }),
                }
                lock.rollback()?;
                tracing::debug!(name = %name, "ref removed");
            }
        }
        Ok(())
    }

    /// Follow `name` through symbolic hops to an object id.
    fn read_symref(&self, name: &RefName, depth: usize) -> Result<Option<ObjectId>, RefError> {
        if depth > self.max_symref_depth {
            return Err(RefError::SymrefLoop(name.to_string()));
        }
        match loose::read_value(&self.path_of(name))? {
            None => Ok(None),
            Some(RefValue::Direct(oid)) => Ok(Some(oid)),
            Some(RefValue::Symbolic(target)) => self.read_symref(&target, depth + 1),
        }
    }

    /// Write `value` at the end of the symbolic chain starting at `name`.
    ///
    /// Each hop is locked while its target is examined; a symbolic hop's
    /// lock is released (never committed) once the recursion returns.
    /// `held` names the hops locked further up, so a chain that comes back
    /// to one of them is a loop rather than lock contention.
    fn update_symref(
        &self,
        name: &RefName,
        value: &RefValue,
        held: &mut Vec<RefName>,
    ) -> Result<Option<ObjectId>, RefError> {
        if held.len() > self.max_symref_depth || held.contains(name) {
            return Err(RefError::SymrefLoop(name.to_string()));
        }

        let path = self.path_of(name);
        let mut lock = self.lock_for_update(&path)?;

        match loose::read_value(&path)? {
            Some(RefValue::Symbolic(target)) => {
                held.push(name.clone());
                let result = self.update_symref(&target, value, held);
                held.pop();
                lock.rollback()?;
                result
            }
            current => {
                if let RefValue::Symbolic(target) = value {
                    if target == name || held.contains(target) {
                        return Err(RefError::SymrefLoop(target.to_string()));
                    }
                }
                loose::write_value(&mut lock, value)?;
                lock.commit()?;
                tracing::debug!(name = %name, value = %value, "symbolic chain updated");
                Ok(current.and_then(|v| v.as_oid().cloned()))
            }
        }
    }

    /// First existing file for `name` among the search roots.
    fn path_for_name(&self, name: &str) -> Result<Option<RefName>, RefError> {
        let name = RefName::new(name)?;
        for prefix in SEARCH_PREFIXES {
            let candidate = if prefix.is_empty() {
                name.clone()
            } else {
                RefName::new_unchecked(format!("{}/{}", prefix, name))
            };
            if self.path_of(&candidate).is_file() {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    fn list_under(&self, dir: &str) -> Result<Vec<SymRef>, RefError> {
        loose::list_refs(&self.root, &self.root.join(dir))
    }
}

impl RefStore for FilesRefStore {
    fn read_head(&self) -> Result<Option<ObjectId>, RefError> {
        self.read_symref(&Self::head_name(), 0)
    }

    fn read_ref(&self, name: &str) -> Result<Option<ObjectId>, RefError> {
        match self.path_for_name(name)? {
            Some(path) => self.read_symref(&path, 0),
            None => Ok(None),
        }
    }

    fn current_ref(&self, source: &str) -> Result<SymRef, RefError> {
        let mut current = RefName::new(source)?;
        for _ in 0..=self.max_symref_depth {
            match loose::read_value(&self.path_of(&current))? {
                Some(RefValue::Symbolic(target)) => current = target,
                Some(RefValue::Direct(_)) | None => return Ok(SymRef::new(current)),
            }
        }
        Err(RefError::SymrefLoop(source.to_string()))
    }

    fn list_all_refs(&self) -> Result<Vec<SymRef>, RefError> {
        let mut refs = vec![SymRef::head()];
        refs.extend(self.list_under(REFS_DIR)?);
        Ok(refs)
    }

    fn list_branches(&self) -> Result<Vec<SymRef>, RefError> {
        self.list_under(HEADS_DIR)
    }

    fn list_remotes(&self) -> Result<Vec<SymRef>, RefError> {
        self.list_under(REMOTES_DIR)
    }

    fn short_name(&self, path: &str) -> String {
        let full = self.root.join(path);
        let Some(parent) = full.parent() else {
            return path.to_string();
        };

        let prefixes = [
            self.root.join(REMOTES_DIR),
            self.root.join(HEADS_DIR),
            self.root.clone(),
        ];
        prefixes
            .iter()
            .find(|dir| parent.ancestors().any(|p| p == dir.as_path()))
            .and_then(|dir| full.strip_prefix(dir).ok())
            .map(loose::slash_path)
            .unwrap_or_else(|| path.to_string())
    }

    fn long_name(&self, name: &str) -> Result<String, RefError> {
        match self.path_for_name(name)? {
            Some(path) => Ok(path.into_inner()),
            None => Err(RefError::UpstreamNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(s: &str) -> ObjectId {
        ObjectId::new(s).unwrap()
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn resolve_direct_ref() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "refs/heads/main", "da39a3ee\n");

        assert_eq!(store.read_ref("refs/heads/main").unwrap(), Some(oid("da39a3ee")));
    }

    #[test]
    fn resolve_symbolic_ref_chain() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "refs/heads/main", "da39a3ee\n");
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");

        assert_eq!(store.read_head().unwrap(), Some(oid("da39a3ee")));
    }

    #[test]
    fn dangling_symref_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");

        assert!(store.read_head().unwrap().is_none());
    }

    #[test]
    fn symref_loop_detected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "refs/heads/a", "ref: refs/heads/b\n");
        write(dir.path(), "refs/heads/b", "ref: refs/heads/a\n");

        assert!(matches!(store.read_ref("a"), Err(RefError::SymrefLoop(_))));
        assert!(matches!(store.current_ref("refs/heads/a"), Err(RefError::SymrefLoop(_))));
    }

    #[test]
    fn depth_limit_is_configurable() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "HEAD", "ref: refs/heads/a\n");
        write(dir.path(), "refs/heads/a", "ref: refs/heads/b\n");
        write(dir.path(), "refs/heads/b", "cafe\n");

        let store = FilesRefStore::new(dir.path());
        assert_eq!(store.read_head().unwrap(), Some(oid("cafe")));

        let shallow = FilesRefStore::new(dir.path()).with_max_symref_depth(1);
        assert!(matches!(shallow.read_head(), Err(RefError::SymrefLoop(_))));
    }

    #[test]
    fn update_ref_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());

        store.update_ref("refs/remotes/origin/main", Some(&oid("abc"))).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("refs/remotes/origin/main")).unwrap(),
            "abc\n"
        );
        assert!(!dir.path().join("refs/remotes/origin/main.lock").exists());
    }

    #[test]
    fn update_ref_none_removes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        store.update_ref("ORIG_HEAD", Some(&oid("abc"))).unwrap();
        store.update_ref("ORIG_HEAD", None).unwrap();
        assert!(!dir.path().join("ORIG_HEAD").exists());
        assert!(!dir.path().join("ORIG_HEAD.lock").exists());

        // Removing an absent ref is fine
        store.update_ref("ORIG_HEAD", None).unwrap();
    }

    #[test]
    fn update_ref_rejects_escaping_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path().join("repo"));
        let result = store.update_ref("../outside", Some(&oid("abc")));
        assert!(matches!(result, Err(RefError::InvalidName(_))));
        assert!(!dir.path().join("outside").exists());
    }

    #[test]
    fn update_head_follows_symref() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");
        write(dir.path(), "refs/heads/main", "old\n");

        let prior = store.update_head(&RefValue::Direct(oid("new"))).unwrap();

        assert_eq!(prior, Some(oid("old")));
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "ref: refs/heads/main\n");
        assert_eq!(fs::read_to_string(dir.path().join("refs/heads/main")).unwrap(), "new\n");
        assert!(!dir.path().join("HEAD.lock").exists());
    }

    #[test]
    fn update_head_on_unborn_branch() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");

        let prior = store.update_head(&RefValue::Direct(oid("first"))).unwrap();
        assert!(prior.is_none());
        assert_eq!(store.read_ref("main").unwrap(), Some(oid("first")));
    }

    #[test]
    fn update_head_blocked_by_lock_on_branch() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");
        write(dir.path(), "refs/heads/main", "old\n");

        let _held = LockFile::acquire(dir.path().join("refs/heads/main")).unwrap();
        let err = store.update_head(&RefValue::Direct(oid("new"))).unwrap_err();
        assert!(err.is_locked(), "{}", err);
        assert!(!dir.path().join("HEAD.lock").exists());
        assert_eq!(fs::read_to_string(dir.path().join("refs/heads/main")).unwrap(), "old\n");
    }

    #[test]
    fn update_head_self_cycle_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: HEAD\n");

        let err = store.update_head(&RefValue::Direct(oid("x"))).unwrap_err();
        assert!(matches!(err, RefError::SymrefLoop(_)), "{:?}", err);
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "ref: HEAD\n");
        assert!(!dir.path().join("HEAD.lock").exists());
    }

    #[test]
    fn update_head_through_branch_cycle_is_a_loop() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/a\n");
        write(dir.path(), "refs/heads/a", "ref: refs/heads/b\n");
        write(dir.path(), "refs/heads/b", "ref: refs/heads/a\n");

        let err = store.update_head(&RefValue::Direct(oid("x"))).unwrap_err();
        assert!(!err.is_locked());
        assert!(matches!(err, RefError::SymrefLoop(ref name) if name == "refs/heads/a"), "{:?}", err);
        assert!(matches!(store.read_head(), Err(RefError::SymrefLoop(_))));

        assert_eq!(fs::read_to_string(dir.path().join("refs/heads/a")).unwrap(), "ref: refs/heads/b\n");
        assert_eq!(fs::read_to_string(dir.path().join("refs/heads/b")).unwrap(), "ref: refs/heads/a\n");
        for marker in ["HEAD.lock", "refs/heads/a.lock", "refs/heads/b.lock"] {
            assert!(!dir.path().join(marker).exists(), "{} left behind", marker);
        }
    }

    #[test]
    fn update_head_refuses_to_close_a_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");
        store.update_head(&RefValue::Direct(oid("c1"))).unwrap();

        let err = store
            .update_head(&RefValue::symbolic("refs/heads/main").unwrap())
            .unwrap_err();
        assert!(matches!(err, RefError::SymrefLoop(_)), "{:?}", err);
        assert_eq!(store.read_ref("main").unwrap(), Some(oid("c1")));
        assert!(!dir.path().join("refs/heads/main.lock").exists());
    }

    #[test]
    fn set_head_attaches_or_detaches() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "refs/heads/topic", "t1\n");

        store.set_head("topic", &oid("t1")).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "ref: refs/heads/topic\n");

        store.set_head("t1", &oid("t1")).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "t1\n");

        // Not a valid branch name at all: detached
        store.set_head("HEAD~2", &oid("t0")).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "t0\n");
    }

    #[test]
    fn compare_and_swap_checks_under_lock() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        store.update_ref("refs/heads/main", Some(&oid("a"))).unwrap();

        store
            .compare_and_swap("refs/heads/main", Some(&oid("a")), Some(&oid("b")))
            .unwrap();
        assert_eq!(store.read_ref("main").unwrap(), Some(oid("b")));

        let err = store
            .compare_and_swap("refs/heads/main", Some(&oid("a")), Some(&oid("c")))
            .unwrap_err();
        match err {
            RefError::StaleValue { expected, actual, .. } => {
                assert_eq!(expected, Some(oid("a")));
                assert_eq!(actual, Some(oid("b")));
            }
            other => panic!("expected StaleValue, got {:?}", other),
        }
        assert_eq!(store.read_ref("main").unwrap(), Some(oid("b")));
        assert!(!dir.path().join("refs/heads/main.lock").exists());
    }

    #[test]
    fn compare_and_swap_with_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());

        store.compare_and_swap("ORIG_HEAD", None, Some(&oid("a"))).unwrap();
        assert!(store
            .compare_and_swap("ORIG_HEAD", None, Some(&oid("b")))
            .unwrap_err()
            .is_stale());
        store.compare_and_swap("ORIG_HEAD", Some(&oid("a")), None).unwrap();
        assert!(store.read_ref("ORIG_HEAD").unwrap().is_none());
    }

    #[test]
    fn name_resolution_priority() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "refs/heads/main", "local\n");
        write(dir.path(), "refs/remotes/main", "remote\n");
        write(dir.path(), "refs/remotes/origin/main", "origin\n");

        assert_eq!(store.read_ref("main").unwrap(), Some(oid("local")));
        assert_eq!(store.read_ref("origin/main").unwrap(), Some(oid("origin")));
        assert_eq!(store.long_name("main").unwrap(), "refs/heads/main");
        assert_eq!(store.long_name("origin/main").unwrap(), "refs/remotes/origin/main");
        assert_eq!(store.long_name("heads/main").unwrap(), "refs/heads/main");
    }

    #[test]
    fn long_name_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        let err = store.long_name("origin/nope").unwrap_err();
        assert!(matches!(err, RefError::UpstreamNotFound(_)));
        assert_eq!(
            err.to_string(),
            "the requested upstream branch 'origin/nope' does not exist"
        );
    }

    #[test]
    fn short_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());

        assert_eq!(store.short_name("refs/heads/main"), "main");
        assert_eq!(store.short_name("refs/heads/feature/x"), "feature/x");
        assert_eq!(store.short_name("refs/remotes/origin/main"), "origin/main");
        assert_eq!(store.short_name("HEAD"), "HEAD");
        assert_eq!(store.short_name("refs/tags/v1"), "refs/tags/v1");
    }

    #[test]
    fn current_ref_walks_symbolic_hops() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");

        // Unborn branch still counts as the current ref
        assert_eq!(store.current_ref(HEAD).unwrap().path(), "refs/heads/main");

        write(dir.path(), "refs/heads/main", "abc\n");
        assert_eq!(store.current_ref(HEAD).unwrap().path(), "refs/heads/main");

        write(dir.path(), "HEAD", "abc\n");
        assert!(store.current_ref(HEAD).unwrap().is_head());
    }

    #[test]
    fn write_symbolic_ref_lands_on_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesRefStore::new(dir.path());
        write(dir.path(), "HEAD", "ref: refs/heads/main\n");

        store.write_symbolic_ref(HEAD, "refs/heads/topic").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("HEAD")).unwrap(), "ref: refs/heads/topic\n");
        assert!(!dir.path().join("refs/heads/main").exists());
        assert_eq!(
            store.read_raw(HEAD).unwrap(),
            Some(RefValue::symbolic("refs/heads/topic").unwrap())
        );

        assert!(matches!(
            store.write_symbolic_ref(HEAD, "refs/heads/bad..name"),
            Err(RefError::InvalidName(_))
        ));
        assert!(store.read_raw("refs/heads/nope").unwrap().is_none());
    }

    #[test]
    fn default_ref_is_main() {
        let store = FilesRefStore::new("/nonexistent");
        assert_eq!(store.default_ref().path(), "refs/heads/main");
    }
}
