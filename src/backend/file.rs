//! Records written to a file named by a `file:` URI.
//!
//! Only an absolute path may be present: a URI carrying credentials, a
//! host, a port, a query or a fragment is rejected at open time, and so is
//! the relative `file:name` form, which URL parsing would move to `/name`. The file is
//! truncated when opened and flushed when the owning namespace is torn down.

use super::{record, Backend, Plugin};
use crate::error::{LogError, Result};
use crate::level::Level;
use parking_lot::Mutex;
use std::fmt;
use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Reject `file:` URI text whose path is relative.
///
/// Must run on the raw text: once parsed, `file:x.log` and `file:///x.log`
/// are the same URL.
pub fn check_uri_text(uri: &str) -> Result<()> {
    let rest = match uri.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("file:") => &uri[5..],
        _ => return Ok(()),
    };
    if rest.starts_with('/') {
        Ok(())
    } else {
        Err(LogError::open_failed(
            "file",
            format!("'{}' is relative; use file:///absolute/path", uri),
        ))
    }
}

/// Extract the file path from a path-only `file:` URI
pub fn path_from_uri(uri: &Url) -> Result<PathBuf> {
    let reject = |what: &str| LogError::open_failed("file", format!("URI must not carry a {}", what));

    if !uri.username().is_empty() || uri.password().is_some() {
        return Err(reject("user"));
    }
    if uri.host().is_some() {
        return Err(reject("host"));
    }
    if uri.port().is_some() {
        return Err(reject("port"));
    }
    if uri.query().is_some() {
        return Err(reject("query"));
    }
    if uri.fragment().is_some() {
        return Err(reject("fragment"));
    }
    if uri.path().is_empty() || uri.path() == "/" {
        return Err(LogError::open_failed("file", "URI has no path"));
    }

    uri.to_file_path()
        .map_err(|_| LogError::open_failed("file", format!("'{}' is not a local path", uri)))
}

pub struct FileBackend {
    path: PathBuf,
    file: Mutex<LineWriter<File>>,
}

impl FileBackend {
    /// Create or truncate `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .map_err(|e| LogError::open_failed("file", format!("{}: {}", path.display(), e)))?;

        debug!("Opened log file {}", path.display());
        Ok(Self {
            path,
            file: Mutex::new(LineWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let line = record::render(namespace, level, args);
        let mut file = self.file.lock();
        record::write_record(&mut *file, &line)?;
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        let this = *self;
        let mut file = this.file.into_inner();
        file.flush()?;
        debug!("Closed log file {}", this.path.display());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "file"
    }
}

/// The `file:` plugin
pub struct FilePlugin;

impl Plugin for FilePlugin {
    fn name(&self) -> &str {
        "file"
    }

    fn open(&self, _namespace: &str, _level: Level, uri: &Url) -> Result<Box<dyn Backend>> {
        let path = path_from_uri(uri)?;
        Ok(Box::new(FileBackend::create(path)?))
    }
}
