use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::LockError;
use crate::Result;

/// Suffix appended to a target path to form its lock marker.
pub const LOCK_SUFFIX: &str = ".lock";

/// Where a [`LockFile`] is in its lifecycle.
///
/// A handle is born `Acquired` and ends in exactly one of the two terminal
/// states. Dropping an `Acquired` handle rolls it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Acquired,
    Committed,
    RolledBack,
}

/// Exclusive write handle on a single file.
///
/// Holding one means this process owns `<path>.lock`. New content is written
/// into the marker; [`commit`](Self::commit) renames it over `path` so readers
/// see either the old file or the new one. Rollback, explicit or on drop,
/// deletes the marker and leaves `path` as it was.
#[derive(Debug)]
pub struct LockFile {
    path: PathBuf,
    lock_path: PathBuf,
    /// `None` once committed or rolled back.
    file: Option<File>,
    state: LockState,
}

/// Build `<path>.lock` without going through a lossy `Display`.
pub fn lock_path_for(path: &Path) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(LOCK_SUFFIX);
    PathBuf::from(s)
}

impl LockFile {
    /// Take the lock for `path` by exclusively creating its marker.
    ///
    /// Fails with [`LockError::AlreadyLocked`] if the marker exists and with
    /// [`LockError::MissingParent`] if the target's directory does not.
    /// Neither case is retried here.
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let lock_path = lock_path_for(&path);

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => LockError::AlreadyLocked {
                    path: lock_path.clone(),
                },
                io::ErrorKind::NotFound => LockError::MissingParent {
                    path: lock_path.clone(),
                },
                _ => LockError::Create {
                    path: lock_path.clone(),
                    source: e,
                },
            })?;

        tracing::trace!(path = %lock_path.display(), "lock acquired");

        Ok(Self {
            path,
            lock_path,
            file: Some(file),
            state: LockState::Acquired,
        })
    }

    /// Like [`acquire`](Self::acquire), but contention is `Ok(None)`.
    pub fn try_acquire(path: impl AsRef<Path>) -> Result<Option<Self>> {
        match Self::acquire(path) {
            Ok(lock) => Ok(Some(lock)),
            Err(LockError::AlreadyLocked { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// The file this lock protects.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    /// Flush the marker to disk and rename it over the target.
    pub fn commit(mut self) -> Result<()> {
        let commit_err = |path: &Path, source| LockError::Commit {
            path: path.to_path_buf(),
            source,
        };

        let file = self.file.take().ok_or_else(|| {
            commit_err(&self.lock_path, io::Error::other("lock file already closed"))
        })?;
        file.sync_all().map_err(|e| commit_err(&self.lock_path, e))?;
        drop(file);

        fs::rename(&self.lock_path, &self.path).map_err(|e| commit_err(&self.lock_path, e))?;

        self.state = LockState::Committed;
        tracing::debug!(path = %self.path.display(), "lock committed");
        Ok(())
    }

    /// Delete the marker without touching the target.
    ///
    /// A no-op on a handle that has already been committed or rolled back.
    pub fn rollback(&mut self) -> Result<()> {
        if self.state != LockState::Acquired {
            return Ok(());
        }
        self.file.take();
        self.state = LockState::RolledBack;
        match fs::remove_file(&self.lock_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(LockError::Rollback {
                    path: self.lock_path.clone(),
                    source: e,
                })
            }
        }
        tracing::trace!(path = %self.lock_path.display(), "lock rolled back");
        Ok(())
    }
}

impl Write for LockFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("lock file already closed"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("lock file already closed"))?
            .flush()
    }
}

impl Drop for LockFile {
    fn drop(&mut self) {
        if self.state == LockState::Acquired {
            let _ = self.rollback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_and_commit() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("HEAD");
        fs::write(&target, b"ref: refs/heads/main\n").unwrap();

        let mut lock = LockFile::acquire(&target).unwrap();
        assert!(lock.lock_path().exists());
        assert_eq!(lock.state(), LockState::Acquired);

        lock.write_all(b"da39a3ee\n").unwrap();
        // Nothing visible at the target until commit
        assert_eq!(fs::read_to_string(&target).unwrap(), "ref: refs/heads/main\n");

        lock.commit().unwrap();

        assert!(!dir.path().join("HEAD.lock").exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "da39a3ee\n");
    }

    #[test]
    fn acquire_and_rollback() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("main");
        fs::write(&target, b"original").unwrap();

        let mut lock = LockFile::acquire(&target).unwrap();
        lock.write_all(b"should not persist").unwrap();
        lock.rollback().unwrap();
        assert_eq!(lock.state(), LockState::RolledBack);

        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
        assert!(!dir.path().join("main.lock").exists());
    }

    #[test]
    fn rollback_twice_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("main");

        let mut lock = LockFile::acquire(&target).unwrap();
        lock.rollback().unwrap();
        lock.rollback().unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn write_after_rollback_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut lock = LockFile::acquire(dir.path().join("main")).unwrap();
        lock.rollback().unwrap();
        assert!(lock.write_all(b"late").is_err());
    }

    #[test]
    fn drop_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("main");
        fs::write(&target, b"original").unwrap();

        {
            let mut lock = LockFile::acquire(&target).unwrap();
            lock.write_all(b"dropped content").unwrap();
        }

        assert!(!dir.path().join("main.lock").exists());
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn double_lock_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("main");

        let _lock1 = LockFile::acquire(&target).unwrap();

        match LockFile::acquire(&target) {
            Err(e @ LockError::AlreadyLocked { .. }) => assert!(e.is_contention()),
            Err(e) => panic!("expected AlreadyLocked, got error: {}", e),
            Ok(_) => panic!("expected AlreadyLocked, got Ok"),
        }
    }

    #[test]
    fn missing_parent_is_distinguished() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("refs/heads/topic");

        match LockFile::acquire(&target) {
            Err(e @ LockError::MissingParent { .. }) => assert!(e.is_missing_parent()),
            Err(e) => panic!("expected MissingParent, got error: {}", e),
            Ok(_) => panic!("expected MissingParent, got Ok"),
        }
    }

    #[test]
    fn try_acquire_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("main");

        let _lock1 = LockFile::acquire(&target).unwrap();
        assert!(LockFile::try_acquire(&target).unwrap().is_none());
    }

    #[test]
    fn lock_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("ORIG_HEAD");

        let mut lock = LockFile::acquire(&target).unwrap();
        lock.write_all(b"created via lock\n").unwrap();
        lock.commit().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "created via lock\n");
    }

    #[test]
    fn lock_path_appends_suffix() {
        let p = lock_path_for(Path::new("refs/heads/feature.v2"));
        assert_eq!(p, PathBuf::from("refs/heads/feature.v2.lock"));
    }
}
