//! Backends and sinks that record what they were asked to do.

use crate::backend::{Backend, Plugin};
use crate::error::{LogError, Result};
use crate::level::Level;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

/// Counters and captured lines shared between a plugin and its backends
#[derive(Default)]
pub struct RecordingState {
    opens: AtomicUsize,
    closes: AtomicUsize,
    lines: Mutex<Vec<String>>,
}

impl RecordingState {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

pub struct RecordingBackend {
    pub state: Arc<RecordingState>,
}

impl RecordingBackend {
    pub fn new(state: Arc<RecordingState>) -> Self {
        Self { state }
    }
}

impl Backend for RecordingBackend {
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        self.state
            .lines
            .lock()
            .push(format!("{};{};{}", namespace, level, args));
        Ok(())
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.state.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "recording"
    }
}

pub struct RecordingPlugin {
    name: String,
    fail: bool,
    pub state: Arc<RecordingState>,
}

impl RecordingPlugin {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail: false,
            state: Arc::default(),
        }
    }

    /// A plugin whose open always fails
    pub fn failing(name: &str) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }
}

impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self, _namespace: &str, _level: Level, _uri: &Url) -> Result<Box<dyn Backend>> {
        if self.fail {
            return Err(LogError::open_failed(&self.name, "refusing to open"));
        }
        self.state.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingBackend::new(self.state.clone())))
    }
}

/// In-memory sink that stays readable after being moved into a backend
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes always fail
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
