use std::fmt;

use crate::error::RefError;
use crate::{HEAD, HEADS_DIR, REMOTES_DIR};

/// A validated reference name: a slash-separated path relative to the
/// store root, such as `HEAD`, `main` or `refs/remotes/origin/main`.
///
/// Enforces the rules from `git-check-ref-format(1)`:
/// - No double dots `..`
/// - No ASCII control characters or space, `~`, `^`, `:`, `?`, `*`, `[`, `\`
/// - Cannot begin or end with `/`, or contain `//`
/// - Cannot begin or end with `.`, and no component may begin with `.`
/// - No component may end with `.lock`
/// - Cannot contain `@{`
/// - Cannot be the single character `@`
///
/// A name that passes these checks cannot climb out of the store root when
/// joined onto it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefName(String);

/// Characters forbidden anywhere in a ref name.
const FORBIDDEN_CHARS: &[char] = &[' ', '~', '^', ':', '?', '*', '[', '\\'];

impl RefName {
    /// Create and validate a ref name.
    pub fn new(name: impl Into<String>) -> Result<Self, RefError> {
        let name = name.into();
        validate_ref_name(&name)?;
        Ok(Self(name))
    }

    /// The name-validity predicate used before creating branches.
    pub fn is_valid(name: &str) -> bool {
        validate_ref_name(name).is_ok()
    }

    /// Create without validation (for internal use with known-good names).
    pub(crate) fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Full path of the local branch called `branch`.
    pub fn branch(branch: &str) -> Result<Self, RefError> {
        validate_ref_name(branch)?;
        Ok(Self(format!("{}/{}", HEADS_DIR, branch)))
    }

    pub fn is_head(&self) -> bool {
        self.0 == HEAD
    }

    /// Is this under `refs/heads/`?
    pub fn is_branch(&self) -> bool {
        self.under(HEADS_DIR)
    }

    /// Is this under `refs/remotes/`?
    pub fn is_remote(&self) -> bool {
        self.under(REMOTES_DIR)
    }

    fn under(&self, dir: &str) -> bool {
        self.0
            .strip_prefix(dir)
            .is_some_and(|rest| rest.starts_with('/'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for RefName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RefName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_ref_name(name: &str) -> Result<(), RefError> {
    let invalid = |reason: &str| Err(RefError::InvalidName(format!("'{}': {}", name, reason)));

    if name.is_empty() {
        return Err(RefError::InvalidName("ref name is empty".into()));
    }

    if name == "@" {
        return Err(RefError::InvalidName("'@' is not a valid ref name".into()));
    }

    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_control() {
            return invalid(&format!("contains control character at position {}", i));
        }
        if FORBIDDEN_CHARS.contains(&c) {
            return invalid(&format!("contains forbidden character '{}' at position {}", c, i));
        }
    }

    if name.starts_with('/') {
        return invalid("starts with '/'");
    }
    if name.ends_with('/') {
        return invalid("ends with '/'");
    }
    if name.ends_with('.') {
        return invalid("ends with '.'");
    }
    if name.contains("..") {
        return invalid("contains '..'");
    }
    if name.contains("//") {
        return invalid("contains '//'");
    }
    if name.contains("@{") {
        return invalid("contains '@{'");
    }

    for component in name.split('/') {
        if component.starts_with('.') {
            return invalid("component starts with '.'");
        }
        if component.ends_with(jit_utils::LOCK_SUFFIX) {
            return invalid("component ends with '.lock'");
        }
    }

    Ok(())
}
