//! # Environment Bootstrap
//!
//! When a namespace is created its variable (`LIBLOG` for the root,
//! `LIBLOG_<NAME>` otherwise) is read once. The value has the form
//! `<level>[,<uri>]`: the integer prefix becomes the namespace threshold and
//! the optional URI selects a plugin by scheme.
//!
//! Nothing in here returns an error to the caller. A missing variable, a
//! value without a URI, an unparsable URI, an unknown scheme or a failing
//! plugin all leave the namespace without a backend and the caller binds the
//! default one. The reason is reported through `tracing` at debug level.

use crate::backend::{file, Backend, PluginRegistry};
use crate::config::LoggerConfig;
use crate::error::{LogError, Result};
use crate::level::{parse_level_prefix, Level};
use tracing::debug;
use url::Url;

/// A parsed `<level>[,<uri>]` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSetting<'a> {
    pub level: Level,
    pub uri: Option<&'a str>,
}

/// Split a bootstrap value into its level and backend selector
pub fn parse_env_value(value: &str) -> EnvSetting<'_> {
    let (level, uri) = match value.split_once(',') {
        Some((level, uri)) => (level, Some(uri)),
        None => (value, None),
    };

    EnvSetting {
        level: parse_level_prefix(level),
        uri,
    }
}

/// What the environment contributed to a new namespace
pub struct Bootstrap {
    pub level: Level,
    pub backend: Option<Box<dyn Backend>>,
}

/// Open the backend selected by `uri` for a namespace
pub fn open_uri(
    plugins: &PluginRegistry,
    namespace: &str,
    level: Level,
    uri: &str,
) -> Result<Box<dyn Backend>> {
    file::check_uri_text(uri)?;
    let parsed = Url::parse(uri).map_err(|source| LogError::InvalidUri {
        uri: uri.to_string(),
        source,
    })?;

    plugins.find_and_open(parsed.scheme(), namespace, level, &parsed)
}

/// Derive the initial level and backend of `namespace` from the environment
pub fn bootstrap(config: &LoggerConfig, plugins: &PluginRegistry, namespace: &str) -> Bootstrap {
    let mut result = Bootstrap {
        level: config.default_level,
        backend: None,
    };

    if !config.bootstrap {
        return result;
    }

    let var = config.env_var_name(namespace);
    let Some(value) = config.env_source.get(&var) else {
        return result;
    };

    let setting = parse_env_value(&value);
    result.level = setting.level;

    let Some(uri) = setting.uri else {
        debug!("{} sets only a level for namespace '{}'", var, namespace);
        return result;
    };

    match open_uri(plugins, namespace, setting.level, uri) {
        Ok(backend) => {
            debug!(
                "Namespace '{}' bound to {} backend from {}",
                namespace,
                backend.kind(),
                var
            );
            result.backend = Some(backend);
        }
        Err(e) => {
            debug!("Ignoring {}={:?}: {}", var, value, e);
        }
    }

    result
}
