use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use jit_utils::LockFile;

use crate::error::RefError;
use crate::name::RefName;
use crate::oid::ObjectId;
use crate::{RefValue, SymRef};

const SYMREF_PREFIX: &[u8] = b"ref: ";

/// Read a reference file. A missing file is `Ok(None)`.
///
/// The file holds either a bare object id or `ref: <target-ref>`, with
/// surrounding whitespace ignored.
pub(crate) fn read_value(path: &Path) -> Result<Option<RefValue>, RefError> {
    let contents = match fs::read(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(RefError::IoPath {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    parse_value(path, &contents).map(Some)
}

pub(crate) fn parse_value(path: &Path, contents: &[u8]) -> Result<RefValue, RefError> {
    let trimmed = contents.trim();

    if trimmed.starts_with(SYMREF_PREFIX) {
        let target = trimmed[SYMREF_PREFIX.len()..].trim().to_str().map_err(|_| {
            RefError::Parse(format!("{}: invalid UTF-8 in symbolic ref target", path.display()))
        })?;
        let target = RefName::new(target).map_err(|e| {
            RefError::Parse(format!("{}: bad symbolic ref target: {}", path.display(), e))
        })?;
        Ok(RefValue::Symbolic(target))
    } else {
        let oid = trimmed.to_str().map_err(|_| {
            RefError::Parse(format!("{}: invalid UTF-8 in ref value", path.display()))
        })?;
        let oid = ObjectId::new(oid)
            .map_err(|e| RefError::Parse(format!("{}: {}", path.display(), e)))?;
        Ok(RefValue::Direct(oid))
    }
}

/// Write `value` and its terminating newline into a held lock.
pub(crate) fn write_value(lock: &mut LockFile, value: &RefValue) -> Result<(), RefError> {
    writeln!(lock, "{}", value).map_err(|e| RefError::IoPath {
        path: lock.lock_path().to_path_buf(),
        source: e,
    })
}

/// List every reference file under `dir`, recursively, as paths relative
/// to `root`. A missing `dir` lists nothing.
///
/// Lock markers and anything else that is not a valid ref name are skipped.
pub(crate) fn list_refs(root: &Path, dir: &Path) -> Result<Vec<SymRef>, RefError> {
    let mut result = Vec::new();
    collect_refs_recursive(root, dir, &mut result)?;
    result.sort();
    Ok(result)
}

fn collect_refs_recursive(
    root: &Path,
    dir: &Path,
    result: &mut Vec<SymRef>,
) -> Result<(), RefError> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(RefError::IoPath {
                path: dir.to_path_buf(),
                source: e,
            })
        }
    };

    for entry in entries {
        let entry = entry.map_err(|e| RefError::IoPath {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_refs_recursive(root, &path, result)?;
            continue;
        }

        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        if let Ok(name) = RefName::new(slash_path(rel)) {
            result.push(SymRef::new(name));
        }
    }

    Ok(())
}

/// Remove empty directories from `path`'s parent upwards, stopping at
/// `stop` (never removed) or at the first directory that is not empty.
pub(crate) fn delete_parent_directories(path: &Path, stop: &Path) {
    let mut dir = path.parent();
    while let Some(d) = dir {
        if d == stop || !d.starts_with(stop) {
            break;
        }
        if fs::remove_dir(d).is_err() {
            break;
        }
        tracing::trace!(dir = %d.display(), "pruned empty ref directory");
        dir = d.parent();
    }
}

/// Render a relative path with `/` separators regardless of platform.
pub(crate) fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Find the first ancestor of `name` (below `root`) that exists as a file,
/// or report that the ref path itself is a directory.
///
/// Creating `refs/heads/a/b` is impossible while `refs/heads/a` is a file,
/// and creating `refs/heads/a` is impossible while `refs/heads/a/` exists.
pub(crate) fn find_dir_file_conflict(root: &Path, name: &RefName) -> Option<String> {
    let mut current = PathBuf::from(root);
    let mut rel = Vec::new();
    let components: Vec<&str> = name.as_str().split('/').collect();

    for (i, component) in components.iter().enumerate() {
        current.push(component);
        rel.push(*component);
        if i + 1 == components.len() {
            break;
        }
        if current.is_file() {
            return Some(rel.join("/"));
        }
    }

    if current.is_dir() {
        return Some(format!("{} (is a directory)", name));
    }
    None
}
