//! Text layout shared by the stream backends.
//!
//! One record is `<unix-seconds>;<namespace>;<level>;<message>\n`. The whole
//! record is rendered into a single buffer before any byte reaches the sink,
//! so a backend can hand it to the writer in one `write_all` under its lock.

use crate::level::Level;
use std::fmt::{self, Write as _};
use std::io::Write;

/// Seconds since the Unix epoch, as printed in the record prefix
pub fn unix_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Render a complete record with an arbitrary body
pub fn render_with(timestamp: i64, namespace: &str, level: Level, body: &dyn fmt::Display) -> String {
    let mut record = String::with_capacity(64);
    // Writing into a String cannot fail.
    let _ = writeln!(record, "{};{};{};{}", timestamp, namespace, level.as_u8(), body);
    record
}

/// Render a record for the current time
pub fn render(namespace: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    render_with(unix_timestamp(), namespace, level, &args)
}

/// Write an already rendered record and flush the sink
pub fn write_record<W: Write + ?Sized>(sink: &mut W, record: &str) -> std::io::Result<()> {
    sink.write_all(record.as_bytes())?;
    sink.flush()
}
