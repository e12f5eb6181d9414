//! Plain records on the standard error stream.
//!
//! This is the built-in fallback bound to every namespace that the
//! environment did not configure. It is also registered as the `stderr`
//! plugin so it can be selected explicitly (`LIBLOG=6,stderr:`).

use super::{record, Backend, Plugin};
use crate::error::Result;
use crate::level::Level;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use url::Url;

/// Writes `<ts>;<namespace>;<level>;<message>` lines to a stream
pub struct StderrBackend<W = io::Stderr> {
    sink: Mutex<W>,
}

impl StderrBackend {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for StderrBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> StderrBackend<W> {
    /// Use an arbitrary stream instead of stderr
    pub fn with_writer(writer: W) -> Self {
        Self {
            sink: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> Backend for StderrBackend<W> {
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let line = record::render(namespace, level, args);
        let mut sink = self.sink.lock();
        record::write_record(&mut *sink, &line)?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "stderr"
    }
}

/// Stateless plugin handing out [`StderrBackend`] instances
pub struct StderrPlugin;

impl Plugin for StderrPlugin {
    fn name(&self) -> &str {
        "stderr"
    }

    fn open(&self, _namespace: &str, _level: Level, _uri: &Url) -> Result<Box<dyn Backend>> {
        Ok(Box::new(StderrBackend::new()))
    }
}
