//! Tracing layer feeding the host log sink

use crate::sink::LogSinkManager;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use viewbridge_core::LogLevel;

/// Map a tracing level onto the bridge's level scale
pub fn level_of(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

/// Forwards tracing events at or above the manager's level to its sink.
///
/// Filtering happens per event against the manager, so
/// [`LogSinkManager::set_level`] takes effect on an installed subscriber.
pub struct HostLoggingLayer {
    manager: &'static LogSinkManager,
}

impl HostLoggingLayer {
    /// Layer over the process-wide manager
    pub fn new() -> Self {
        Self::with_manager(LogSinkManager::global())
    }

    pub fn with_manager(manager: &'static LogSinkManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &'static LogSinkManager {
        self.manager
    }
}

impl Default for HostLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for HostLoggingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // The level is mutable, so callsites must not cache a verdict
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.manager.is_enabled(level_of(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !self.manager.has_sink() {
            return;
        }
        let metadata = event.metadata();
        let mut line = RecordLine::default();
        event.record(&mut line);
        self.manager
            .log(level_of(metadata.level()), metadata.target(), &line.finish());
    }
}

/// Renders an event as its message followed by `name=value` pairs
#[derive(Default)]
struct RecordLine {
    message: String,
    fields: String,
}

impl RecordLine {
    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for RecordLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message.push_str(value),
            name => self.push_field(name, format_args!("{value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{value:?}");
            }
            name => self.push_field(name, format_args!("{value:?}")),
        }
    }
}

/// Install the host logging layer as the global subscriber, forwarding
/// records at `level` and above.
///
/// The level is applied even when the embedding application already set a
/// global subscriber; the return value says whether this call installed one.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let manager = LogSinkManager::global();
    manager.set_level(level);
    let subscriber = tracing_subscriber::registry().with(HostLoggingLayer::with_manager(manager));
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
