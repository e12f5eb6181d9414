//! # Logger Context and Dispatch
//!
//! [`Logger`] ties together the plugin registry, the namespace registry and
//! the configuration. Every message goes through [`Logger::dispatch`]:
//!
//! 1. the namespace is looked up, or created and bootstrapped from the
//!    environment on first use;
//! 2. messages less severe than the namespace threshold return immediately,
//!    before any formatting happens;
//! 3. everything else is handed to the namespace's backend.
//!
//! A process-wide instance is available through [`global`], with free
//! functions mirroring the methods. Register plugins and configure
//! namespaces during startup, and call [`teardown`] once all logging has
//! stopped.

use crate::backend::{builtin_plugins, Backend, Plugin, PluginRegistry, StderrBackend};
use crate::bootstrap::{bootstrap, open_uri};
use crate::config::LoggerConfig;
use crate::error::Result;
use crate::level::Level;
use crate::namespace::{Namespace, NamespaceRegistry};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Owner of all namespaces and plugins
pub struct Logger {
    config: LoggerConfig,
    plugins: PluginRegistry,
    namespaces: NamespaceRegistry,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl Logger {
    /// Create a logger with no plugins registered
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            plugins: PluginRegistry::new(),
            namespaces: NamespaceRegistry::new(),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Register a backend plugin under its name
    pub fn register_plugin<P: Plugin + 'static>(&self, plugin: P) -> Result<()> {
        self.plugins.register(Arc::new(plugin))
    }

    /// Register the `stderr`, `color`, `file` and (on unix) `syslog` plugins
    pub fn register_builtin_plugins(&self) -> Result<()> {
        for plugin in builtin_plugins() {
            self.plugins.register(plugin)?;
        }
        Ok(())
    }

    /// Return the namespace called `name`, creating it on first use.
    ///
    /// The environment is consulted and the plugin opened while the
    /// namespace table is write-locked, so each name is bootstrapped once.
    pub fn lookup_or_create(&self, name: &str) -> Result<Arc<Namespace>> {
        self.namespaces.get_or_insert_with(name, || {
            let boot = bootstrap(&self.config, &self.plugins, name);
            let backend: Box<dyn Backend> = match boot.backend {
                Some(backend) => backend,
                None => Box::new(StderrBackend::new()),
            };

            debug!(
                "Created namespace '{}' at level {} with {} backend",
                name,
                boot.level,
                backend.kind()
            );
            Namespace::new(name, boot.level, backend)
        })
    }

    /// Route one message to the backend of `namespace`
    pub fn dispatch(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let ns = self.lookup_or_create(namespace)?;

        if !ns.enabled(level) {
            return Ok(());
        }

        ns.print(level, args)
    }

    /// Whether a message at `level` would currently be emitted
    pub fn enabled(&self, namespace: &str, level: Level) -> Result<bool> {
        Ok(self.lookup_or_create(namespace)?.enabled(level))
    }

    /// Set the threshold of `namespace`, returning the previous one
    pub fn set_level(&self, namespace: &str, level: Level) -> Result<Level> {
        Ok(self.lookup_or_create(namespace)?.set_level(level))
    }

    pub fn get_level(&self, namespace: &str) -> Result<Level> {
        Ok(self.lookup_or_create(namespace)?.level())
    }

    /// Bind `backend` to `namespace`, returning the previous binding.
    ///
    /// The old backend is not closed; the caller decides whether to call
    /// [`Backend::close`] on it or keep using it elsewhere.
    pub fn set_backend(&self, namespace: &str, backend: Box<dyn Backend>) -> Result<Box<dyn Backend>> {
        Ok(self.lookup_or_create(namespace)?.replace_backend(backend))
    }

    /// Configure `namespace` with a level and a backend selected by `uri`.
    ///
    /// On success the previous backend is closed. On failure the namespace
    /// is left exactly as it was.
    pub fn setup(&self, namespace: &str, level: Level, uri: &str) -> Result<()> {
        let backend = open_uri(&self.plugins, namespace, level, uri)?;
        let ns = self.lookup_or_create(namespace)?;

        ns.set_level(level);
        let old = ns.replace_backend(backend);
        let kind = old.kind();
        if let Err(e) = old.close() {
            warn!(
                "Failed to close previous {} backend of namespace '{}': {}",
                kind, namespace, e
            );
        }
        Ok(())
    }

    /// Close every namespace backend and forget all namespaces and plugins
    pub fn teardown(&self) {
        let closed = self.namespaces.teardown();
        self.plugins.teardown();
        debug!("Logger torn down, {} namespaces closed", closed);
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with the default configuration
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// [`Logger::dispatch`] on the global logger
pub fn dispatch(namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
    global().dispatch(namespace, level, args)
}

/// [`Logger::register_plugin`] on the global logger
pub fn register_plugin<P: Plugin + 'static>(plugin: P) -> Result<()> {
    global().register_plugin(plugin)
}

/// [`Logger::set_level`] on the global logger
pub fn set_level(namespace: &str, level: Level) -> Result<Level> {
    global().set_level(namespace, level)
}

/// [`Logger::get_level`] on the global logger
pub fn get_level(namespace: &str) -> Result<Level> {
    global().get_level(namespace)
}

/// [`Logger::set_backend`] on the global logger
pub fn set_backend(namespace: &str, backend: Box<dyn Backend>) -> Result<Box<dyn Backend>> {
    global().set_backend(namespace, backend)
}

/// [`Logger::setup`] on the global logger
pub fn setup(namespace: &str, level: Level, uri: &str) -> Result<()> {
    global().setup(namespace, level, uri)
}

/// [`Logger::teardown`] on the global logger
pub fn teardown() {
    global().teardown()
}
