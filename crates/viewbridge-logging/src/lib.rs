//! viewbridge-logging - Tracing to host log sink bridge
//!
//! This crate provides:
//! - [`HostLoggingLayer`] tracing layer that forwards events to a host sink
//! - [`LogSink`] the host-supplied sink and [`LogSinkManager`] holding it
//! - [`console_statement`] for mirroring native logs into the page console

mod console;
mod layer;
mod sink;

pub use console::console_statement;
pub use layer::{HostLoggingLayer, init_logging, level_of};
pub use sink::{LogSink, LogSinkManager};
pub use viewbridge_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HostLoggingLayer, LogLevel, LogSink, LogSinkManager, init_logging};
}
