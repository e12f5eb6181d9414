//! Colorized records on the standard error stream.
//!
//! The record prefix is printed as-is and only the message body is styled:
//! the most severe levels get a red background (blinking for `emerg`), then
//! bright red, red, bright yellow and yellow; `info` stays uncolored and
//! `debug` is green. Every body is followed by a reset.
//!
//! The escape sequences are always written. Unlike `colored`'s own
//! `Colorize` methods they do not depend on whether stdout is a terminal or
//! on `NO_COLOR` / `CLICOLOR`; binding a namespace to `color:` is the request
//! for color.

use super::{record, Backend, Plugin};
use crate::error::Result;
use crate::level::Level;
use colored::Color;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use url::Url;

const BLINK: &str = "5";
const RESET: &str = "\x1b[0m";

/// SGR sequence that starts the body of a `level` message, if any
pub fn style_prefix(level: Level) -> Option<String> {
    let (bg, fg, blink) = match level {
        Level::Emerg => (Some(Color::Red), Some(Color::BrightRed), true),
        Level::Alert => (Some(Color::Red), None, false),
        Level::Crit => (None, Some(Color::BrightRed), false),
        Level::Err => (None, Some(Color::Red), false),
        Level::Warning => (None, Some(Color::BrightYellow), false),
        Level::Notice => (None, Some(Color::Yellow), false),
        Level::Info => (None, None, false),
        Level::Debug => (None, Some(Color::Green), false),
    };

    let mut codes: Vec<Cow<'static, str>> = Vec::with_capacity(3);
    if let Some(bg) = bg {
        codes.push(bg.to_bg_str());
    }
    if let Some(fg) = fg {
        codes.push(fg.to_fg_str());
    }
    if blink {
        codes.push(Cow::Borrowed(BLINK));
    }

    if codes.is_empty() {
        None
    } else {
        Some(format!("\x1b[{}m", codes.join(";")))
    }
}

/// Style a message body for `level`, always ending with a reset
pub fn paint(level: Level, body: &str) -> String {
    match style_prefix(level) {
        Some(prefix) => format!("{}{}{}", prefix, body, RESET),
        None => format!("{}{}", body, RESET),
    }
}

pub struct ColorBackend<W = io::Stderr> {
    sink: Mutex<W>,
}

impl ColorBackend {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for ColorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ColorBackend<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            sink: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> Backend for ColorBackend<W> {
    fn print(&self, namespace: &str, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        let body = paint(level, &args.to_string());
        let line = record::render_with(record::unix_timestamp(), namespace, level, &body);
        let mut sink = self.sink.lock();
        record::write_record(&mut *sink, &line)?;
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "color"
    }
}

/// The `color:` plugin; stateless, ignores the rest of the URI
pub struct ColorPlugin;

impl Plugin for ColorPlugin {
    fn name(&self) -> &str {
        "color"
    }

    fn open(&self, _namespace: &str, _level: Level, _uri: &Url) -> Result<Box<dyn Backend>> {
        Ok(Box::new(ColorBackend::new()))
    }
}
