//! Lookup of revisions by name

use crate::analysis::{Error, Result};
use crate::arch::tigress::{Revision, RevisionDef};
use crate::arch::RevisionName;
use std::collections::HashMap;
use std::sync::Arc;

/// A set of named revisions.
///
/// Revisions are validated before they are admitted, so anything handed out
/// by `get` is safe to decode with.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    revisions: HashMap<String, Arc<Revision>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry holding every built-in revision.
    pub fn with_builtins() -> Self {
        let mut registry = Registry::new();

        for name in RevisionName::all() {
            registry
                .revisions
                .insert(name.to_string(), Arc::new(name.revision().clone()));
        }

        registry
    }

    /// Validate a revision definition and add it under its own name.
    pub fn register(&mut self, def: &RevisionDef) -> Result<Arc<Revision>> {
        if self.revisions.contains_key(&def.name) {
            return Err(Error::RevisionAlreadyRegistered(def.name.clone()));
        }

        let revision = Revision::from_def(def)?;
        log::info!(
            "Registered revision {} ({} opcode bytes, {} branches)",
            revision.name(),
            revision.opcodes().iter().count(),
            revision.branch_mode()
        );

        self.insert(revision)
    }

    /// Add an already validated revision under its own name.
    pub fn insert(&mut self, revision: Revision) -> Result<Arc<Revision>> {
        let name = revision.name().to_string();
        if self.revisions.contains_key(&name) {
            return Err(Error::RevisionAlreadyRegistered(name));
        }

        let revision = Arc::new(revision);
        self.revisions.insert(name, revision.clone());

        Ok(revision)
    }

    pub fn get(&self, name: &str) -> Result<Arc<Revision>> {
        self.revisions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownRevision(name.to_string()))
    }

    /// Names of every registered revision, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.revisions.keys().map(String::as_str).collect();
        names.sort_unstable();

        names
    }
}
