//! # Logger Configuration
//!
//! [`LoggerConfig`] carries the few knobs a [`crate::Logger`] needs: the
//! threshold given to namespaces nobody configured, the prefix of the
//! environment variables consulted at namespace creation, and where those
//! variables are read from. Tests use [`EnvSource::Fixed`] so they do not
//! depend on, or mutate, the process environment.

use crate::level::Level;
use std::collections::HashMap;

/// Where bootstrap variables are read from
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The real process environment
    #[default]
    Process,
    /// A fixed set of variables
    Fixed(HashMap<String, String>),
}

impl EnvSource {
    /// Build a fixed environment from name/value pairs
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvSource::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Value of `name`, if set and valid unicode
    pub fn get(&self, name: &str) -> Option<String> {
        match self {
            EnvSource::Process => std::env::var(name).ok(),
            EnvSource::Fixed(vars) => vars.get(name).cloned(),
        }
    }
}

/// Settings of a [`crate::Logger`]
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Threshold of namespaces the environment did not configure
    pub default_level: Level,
    /// Root variable name; namespaced variables append `_<NAME>`
    pub env_prefix: String,
    pub env_source: EnvSource,
    /// Consult the environment when a namespace is created
    pub bootstrap: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: crate::defaults::LEVEL,
            env_prefix: crate::defaults::ENV_PREFIX.to_string(),
            env_source: EnvSource::Process,
            bootstrap: true,
        }
    }
}

impl LoggerConfig {
    pub fn with_default_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    pub fn with_env(mut self, source: EnvSource) -> Self {
        self.env_source = source;
        self
    }

    /// Disable environment bootstrap entirely
    pub fn without_bootstrap(mut self) -> Self {
        self.bootstrap = false;
        self
    }

    /// Name of the variable configuring `namespace`
    ///
    /// The root namespace reads the bare prefix (`LIBLOG`); any other reads
    /// `LIBLOG_<NAME>` with the name uppercased.
    pub fn env_var_name(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            self.env_prefix.clone()
        } else {
            format!("{}_{}", self.env_prefix, namespace.to_uppercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert_eq!(config.default_level, crate::defaults::LEVEL);
        assert_eq!(config.env_prefix, "LIBLOG");
        assert!(config.bootstrap);
        assert!(matches!(config.env_source, EnvSource::Process));
    }

    #[test]
    fn test_env_var_name() {
        let config = LoggerConfig::default();
        assert_eq!(config.env_var_name(""), "LIBLOG");
        assert_eq!(config.env_var_name("net"), "LIBLOG_NET");
        assert_eq!(config.env_var_name("App"), "LIBLOG_APP");
    }

    #[test]
    fn test_fixed_env_source() {
        let env = EnvSource::fixed([("LIBLOG_IO", "5")]);
        assert_eq!(env.get("LIBLOG_IO").as_deref(), Some("5"));
        assert_eq!(env.get("LIBLOG"), None);
    }
}
