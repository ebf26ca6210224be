//! Ref labels for annotating commits in history output, e.g.
//! `(HEAD -> main, topic)`.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::RefError;
use crate::oid::ObjectId;
use crate::store::RefStore;
use crate::{SymRef, HEAD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecorateMode {
    /// `main`, `origin/main`
    #[default]
    Short,
    /// `refs/heads/main`
    Full,
}

impl FromStr for DecorateMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" | "auto" => Ok(DecorateMode::Short),
            "full" => Ok(DecorateMode::Full),
            other => Err(format!("invalid --decorate option: {}", other)),
        }
    }
}

/// Snapshot of which refs point where, taken once and reused for every
/// commit being printed.
pub struct Decorator<'a> {
    store: &'a dyn RefStore,
    mode: DecorateMode,
    reverse_refs: HashMap<ObjectId, Vec<SymRef>>,
    current_ref: SymRef,
}

impl<'a> Decorator<'a> {
    pub fn new(store: &'a dyn RefStore, mode: DecorateMode) -> Result<Self, RefError> {
        Ok(Self {
            store,
            mode,
            reverse_refs: store.reverse_refs()?,
            current_ref: store.current_ref(HEAD)?,
        })
    }

    /// Labels for `oid`, `HEAD` first.
    ///
    /// When `HEAD` is on a branch it is folded into that branch's label as
    /// `HEAD -> main`; a detached `HEAD` gets a label of its own.
    pub fn labels(&self, oid: &ObjectId) -> Vec<String> {
        let Some(refs) = self.reverse_refs.get(oid) else {
            return Vec::new();
        };

        let (head, refs): (Vec<&SymRef>, Vec<&SymRef>) = refs
            .iter()
            .partition(|r| r.is_head() && !self.current_ref.is_head());
        let head = head.first();

        refs.into_iter()
            .map(|r| {
                let name = self.display_name(r);
                match head {
                    Some(head) if *r == self.current_ref => format!("{} -> {}", head.path(), name),
                    _ => name,
                }
            })
            .collect()
    }

    /// `" (a, b)"`, or an empty string when nothing points at `oid`.
    pub fn decorate(&self, oid: &ObjectId) -> String {
        let labels = self.labels(oid);
        if labels.is_empty() {
            return String::new();
        }
        format!(" ({})", labels.join(", "))
    }

    fn display_name(&self, r: &SymRef) -> String {
        match self.mode {
            DecorateMode::Short => r.short_name(self.store),
            DecorateMode::Full => r.path().to_string(),
        }
    }
}
