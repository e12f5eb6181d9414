//! # liblog
//!
//! Namespaced, leveled logging with pluggable output backends.
//!
//! Every message carries a namespace (the empty string is the root
//! namespace) and one of eight syslog severities. Each namespace has its own
//! threshold and its own backend. Namespaces are created on first use and
//! can configure themselves from the environment:
//!
//! ```text
//! LIBLOG=5                          # root namespace: notice and above, stderr
//! LIBLOG_NET=7,color:               # namespace NET: everything, colorized
//! LIBLOG_DB=3,file:///var/log/db    # namespace DB: err and above, to a file
//! ```
//!
//! The part after the comma is a URI whose scheme names a registered
//! backend plugin. Unknown schemes and malformed values fall back to plain
//! records on stderr; logging never fails because of configuration.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use liblog::{Level, Logger, LoggerConfig};
//!
//! fn main() -> liblog::Result<()> {
//!     let logger = Logger::new(LoggerConfig::default());
//!     logger.register_builtin_plugins()?;
//!
//!     logger.setup("NET", Level::Debug, "color:")?;
//!     logger.dispatch("NET", Level::Info, format_args!("listening on {}", 8080))?;
//!
//!     logger.teardown();
//!     Ok(())
//! }
//! ```
//!
//! The same operations exist as free functions on a process-wide logger
//! ([`global`]), which is what the `ll_*!` macros use.
//!
//! ## Modules
//!
//! - `level`: the eight severities and their parsing
//! - `backend`: the backend and plugin traits, the plugin registry and the
//!   built-in stderr, color, file and syslog backends
//! - `namespace`: namespace entries and their registry
//! - `bootstrap`: environment-driven namespace configuration
//! - `logger`: the context object tying it together, and dispatch
//! - `logging`: a `tracing` formatter producing liblog-style records

pub mod backend;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod logging;
pub mod namespace;

mod macros;

#[cfg(test)]
pub(crate) mod test_support;

pub use backend::{Backend, Plugin, PluginRegistry};
pub use config::{EnvSource, LoggerConfig};
pub use error::{LogError, Result};
pub use level::Level;
pub use logger::{
    dispatch, get_level, global, register_plugin, set_backend, set_level, setup, teardown, Logger,
};
pub use namespace::{Namespace, NamespaceRegistry};

/// URI type handed to [`Plugin::open`]
pub use url::Url;

/// The current version of liblog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration values
pub mod defaults {
    use crate::Level;

    /// Threshold of namespaces the environment does not configure.
    ///
    /// Debug builds log everything; release builds start at `Notice`.
    #[cfg(debug_assertions)]
    pub const LEVEL: Level = Level::Debug;
    #[cfg(not(debug_assertions))]
    pub const LEVEL: Level = Level::Notice;

    /// Name of the root namespace variable and prefix of all others
    pub const ENV_PREFIX: &str = "LIBLOG";

    /// Most verbose level the `ll_*!` macros compile in
    pub const STATIC_MAX_LEVEL: Level = if cfg!(feature = "max-level-emerg") {
        Level::Emerg
    } else if cfg!(feature = "max-level-alert") {
        Level::Alert
    } else if cfg!(feature = "max-level-crit") {
        Level::Crit
    } else if cfg!(feature = "max-level-err") {
        Level::Err
    } else if cfg!(feature = "max-level-warning") {
        Level::Warning
    } else if cfg!(feature = "max-level-notice") {
        Level::Notice
    } else if cfg!(feature = "max-level-info") {
        Level::Info
    } else {
        Level::Debug
    };
}
