use crate::backend::record;
use crate::level::Level;
use std::fmt::{self, Write as _};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// Map a `tracing` level onto the closest syslog severity
pub fn level_from_tracing(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Err,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG | tracing::Level::TRACE => Level::Debug,
    }
}

/// A tracing event formatter that prints events in the liblog record layout.
///
/// The event target takes the place of the namespace, so the crate's own
/// diagnostics read like any other namespace's output:
/// `<ts>;liblog::bootstrap;7;Ignoring LIBLOG_NET=...`.
pub struct RecordFormatter;

impl<S, N> FormatEvent<S, N> for RecordFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        // Fields are rendered into a buffer first so the record is written
        // in one piece.
        let mut buffer = String::new();
        ctx.format_fields(Writer::new(&mut buffer), event)?;

        let metadata = event.metadata();
        let line = record::render_with(
            record::unix_timestamp(),
            metadata.target(),
            level_from_tracing(metadata.level()),
            &buffer,
        );

        writer.write_str(&line)
    }
}
