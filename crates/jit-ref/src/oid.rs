use std::fmt;
use std::str::FromStr;

use crate::error::RefError;

/// An object identifier as stored in a reference file.
///
/// The store treats it as opaque: it is produced by the object database and
/// written back verbatim. The only checks are the ones the one-line file
/// format needs for the value to read back unchanged: not empty, no line
/// breaks or surrounding whitespace, and no `ref: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(oid: impl Into<String>) -> Result<Self, RefError> {
        let oid = oid.into();
        if oid.is_empty() {
            return Err(RefError::Parse("object id is empty".into()));
        }
        if oid.contains(|c: char| c == '\n' || c == '\r') {
            return Err(RefError::Parse(format!(
                "object id {:?} contains a line break",
                oid
            )));
        }
        if oid.trim() != oid {
            return Err(RefError::Parse(format!(
                "object id {:?} has surrounding whitespace",
                oid
            )));
        }
        if oid.starts_with("ref: ") {
            return Err(RefError::Parse(format!(
                "object id {:?} would read back as a symbolic ref",
                oid
            )));
        }
        Ok(Self(oid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` characters, for display.
    pub fn short(&self, len: usize) -> &str {
        match self.0.char_indices().nth(len) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl FromStr for ObjectId {
    type Err = RefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
