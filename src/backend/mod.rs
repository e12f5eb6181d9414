//! # Backends and the Plugin Registry
//!
//! A [`Plugin`] is a named factory registered once per process. Its name is
//! also a URI scheme, so `color:` or `file:///var/log/app.log` selects a
//! plugin and hands it the parsed URI. Opening a plugin yields a
//! [`Backend`], the per-namespace instance that owns whatever the plugin
//! allocated and knows how to print records and release them again.
//!
//! Namespaces own their backend instances. The registry only owns plugins,
//! which is why [`PluginRegistry::teardown`] never closes anything.

use crate::error::{LogError, Result};
use crate::level::Level;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub mod color;
pub mod file;
pub mod record;
pub mod stderr;
#[cfg(unix)]
pub mod syslog;

pub use color::{ColorBackend, ColorPlugin};
pub use file::{FileBackend, FilePlugin};
pub use stderr::{StderrBackend, StderrPlugin};
#[cfg(unix)]
pub use syslog::{SyslogBackend, SyslogPlugin};

/// An opened output bound to a namespace
///
/// `print` may be called concurrently from several threads. Implementations
/// that write to a shared sink must emit each record as one unit.
pub trait Backend: Send + Sync {
    /// Format and emit one record
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()>;

    /// Release the resources acquired when the backend was opened
    fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }

    /// Short identifier used in diagnostics
    fn kind(&self) -> &'static str;
}

/// A named backend factory selectable by URI scheme
pub trait Plugin: Send + Sync {
    /// Unique, case-insensitive plugin name
    fn name(&self) -> &str;

    /// Create a backend instance for `namespace`.
    ///
    /// Called while a new namespace is being created, with the logger's
    /// namespace table locked: an implementation must not log through the
    /// same [`crate::Logger`].
    fn open(&self, namespace: &str, level: Level, uri: &Url) -> Result<Box<dyn Backend>>;
}

/// Process-wide table of registered plugins
///
/// Most recently registered plugins are kept at the front.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: RwLock<Vec<Arc<dyn Plugin>>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin, rejecting names already present in any letter case
    pub fn register(&self, plugin: Arc<dyn Plugin>) -> Result<()> {
        let mut plugins = self.plugins.write();

        if plugins
            .iter()
            .any(|p| p.name().eq_ignore_ascii_case(plugin.name()))
        {
            return Err(LogError::DuplicateName(plugin.name().to_string()));
        }

        debug!("Registered logger plugin '{}'", plugin.name());
        plugins.insert(0, plugin);
        Ok(())
    }

    /// Look up a plugin by scheme
    pub fn find(&self, scheme: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins
            .read()
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(scheme))
            .cloned()
    }

    /// Find the plugin named by `scheme` and open it for `namespace`
    pub fn find_and_open(
        &self,
        scheme: &str,
        namespace: &str,
        level: Level,
        uri: &Url,
    ) -> Result<Box<dyn Backend>> {
        // The lock is released before open() so plugins may log themselves.
        let plugin = self
            .find(scheme)
            .ok_or_else(|| LogError::NotFound(scheme.to_string()))?;

        plugin.open(namespace, level, uri)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Registered plugin names, most recent first
    pub fn names(&self) -> Vec<String> {
        self.plugins
            .read()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.read().is_empty()
    }

    /// Drop every registered plugin
    pub fn teardown(&self) {
        self.plugins.write().clear();
    }
}

/// The plugins shipped with the crate
pub fn builtin_plugins() -> Vec<Arc<dyn Plugin>> {
    let mut plugins: Vec<Arc<dyn Plugin>> = vec![
        Arc::new(StderrPlugin),
        Arc::new(ColorPlugin),
        Arc::new(FilePlugin),
    ];

    #[cfg(unix)]
    plugins.push(Arc::new(SyslogPlugin));

    plugins
}
