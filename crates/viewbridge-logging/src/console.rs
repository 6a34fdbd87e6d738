//! Mirroring native log records into the page console

use viewbridge_core::LogLevel;
use viewbridge_transport::js_string_literal;

/// Render a `console.*` statement for a log record.
///
/// Returns `None` for [`LogLevel::Off`]. A developer-mode host can evaluate
/// the statement in its view so native logs show up in the web inspector.
pub fn console_statement(level: LogLevel, target: &str, message: &str) -> Option<String> {
    let method = match level {
        LogLevel::Trace | LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Off => return None,
    };
    let line = format!("[{target}] {message}");
    Some(format!("console.{method}({});", js_string_literal(&line)))
}
