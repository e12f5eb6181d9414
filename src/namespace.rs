//! # Namespaces
//!
//! A [`Namespace`] is a named channel with its own threshold and its own
//! bound backend. The [`NamespaceRegistry`] maps names to shared namespace
//! entries. Entries are created lazily by the [`crate::Logger`] and only ever
//! removed all at once by [`NamespaceRegistry::teardown`].
//!
//! The table is behind a read-write lock that is write-locked only to build
//! and insert a new entry, so dispatch to existing namespaces proceeds in
//! parallel. The
//! threshold is an atomic and the backend slot has its own lock, which lets
//! levels and backends be swapped on a live namespace.

use crate::backend::{Backend, StderrBackend};
use crate::error::{LogError, Result};
use crate::level::Level;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::warn;

/// Per-namespace state: name, threshold and bound backend
pub struct Namespace {
    name: String,
    level: AtomicU8,
    backend: RwLock<Box<dyn Backend>>,
}

impl Namespace {
    pub fn new(name: impl Into<String>, level: Level, backend: Box<dyn Backend>) -> Self {
        Self {
            name: name.into(),
            level: AtomicU8::new(level.as_u8()),
            backend: RwLock::new(backend),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current threshold
    pub fn level(&self) -> Level {
        Level::from_i64_clamped(i64::from(self.level.load(Ordering::Relaxed)))
    }

    /// Replace the threshold, returning the previous one
    pub fn set_level(&self, level: Level) -> Level {
        let old = self.level.swap(level.as_u8(), Ordering::Relaxed);
        Level::from_i64_clamped(i64::from(old))
    }

    /// Whether a message at `level` would be emitted
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    /// Kind of the currently bound backend
    pub fn backend_kind(&self) -> &'static str {
        self.backend.read().kind()
    }

    /// Print through the bound backend without level filtering
    pub fn print(&self, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        self.backend.read().print(&self.name, level, args)
    }

    /// Bind `backend`, returning the previous binding unclosed
    pub fn replace_backend(&self, backend: Box<dyn Backend>) -> Box<dyn Backend> {
        std::mem::replace(&mut *self.backend.write(), backend)
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Namespace")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("backend", &self.backend_kind())
            .finish()
    }
}

/// Table of live namespaces keyed by exact name
#[derive(Default)]
pub struct NamespaceRegistry {
    namespaces: RwLock<HashMap<String, Arc<Namespace>>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Namespace>> {
        self.namespaces.read().get(name).cloned()
    }

    /// Return the entry for `name`, building it with `make` if absent.
    ///
    /// `make` runs under the table's write lock after a second lookup, so a
    /// name is built at most once even when several threads miss at the same
    /// time. It must not touch this registry.
    pub fn get_or_insert_with<F>(&self, name: &str, make: F) -> Result<Arc<Namespace>>
    where
        F: FnOnce() -> Namespace,
    {
        if let Some(ns) = self.get(name) {
            return Ok(ns);
        }

        let mut namespaces = self.namespaces.write();
        if let Some(ns) = namespaces.get(name) {
            return Ok(ns.clone());
        }

        if namespaces.try_reserve(1).is_err() {
            return Err(LogError::OutOfMemory(name.to_string()));
        }

        let entry = Arc::new(make());
        namespaces.insert(name.to_string(), entry.clone());
        Ok(entry)
    }

    pub fn len(&self) -> usize {
        self.namespaces.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.read().is_empty()
    }

    /// Names of all live namespaces, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.namespaces.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Close every bound backend and forget all namespaces.
    ///
    /// Returns the number of backends closed. Close failures are logged and
    /// otherwise ignored.
    pub fn teardown(&self) -> usize {
        let drained: Vec<Arc<Namespace>> = self
            .namespaces
            .write()
            .drain()
            .map(|(_, ns)| ns)
            .collect();

        let count = drained.len();
        for ns in drained {
            // A dispatch still holding this entry keeps a usable backend.
            let backend = ns.replace_backend(Box::new(StderrBackend::new()));
            close_backend(&ns.name, backend);
        }
        count
    }
}

fn close_backend(namespace: &str, backend: Box<dyn Backend>) {
    let kind = backend.kind();
    if let Err(e) = backend.close() {
        warn!(
            "Failed to close {} backend of namespace '{}': {}",
            kind, namespace, e
        );
    }
}
