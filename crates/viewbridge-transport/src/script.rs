//! Page-side script surface
//!
//! The page half of the bridge is a small script injected at document start.
//! Both transport variants share one template and differ only in the
//! delivery expression. The native host pushes messages back by evaluating
//! a call to the inbound entry point.

use viewbridge_core::{HANDLER_SLOT, INBOUND_FUNCTION, SEND_FUNCTION, TransportKind};

const TEMPLATE: &str = include_str!("script/bridge.js");
const DELIVER_PLACEHOLDER: &str = "__DELIVER__";
const GLOBALS: [(&str, &str); 3] = [
    ("__SEND__", SEND_FUNCTION),
    ("__HANDLER__", HANDLER_SLOT),
    ("__INBOUND__", INBOUND_FUNCTION),
];

/// The host primitive the outbound relay calls for `kind`
pub fn delivery_expression(kind: TransportKind, handler_name: &str) -> String {
    match kind {
        TransportKind::Webkit => format!(
            "webkit.messageHandlers[{}].postMessage",
            js_string_literal(handler_name)
        ),
        TransportKind::Ipc => "window.ipc.postMessage".to_string(),
    }
}

/// Render the bootstrap script defining `sendToPlugin`, `onPluginMessage`
/// and `onPluginMessageInternal` for the given transport
pub fn bootstrap_script(kind: TransportKind, handler_name: &str) -> String {
    // Delivery goes in last so a handler name can never match a placeholder
    GLOBALS
        .into_iter()
        .fold(TEMPLATE.to_string(), |script, (placeholder, name)| {
            script.replace(placeholder, name)
        })
        .replace(DELIVER_PLACEHOLDER, &delivery_expression(kind, handler_name))
}

/// Render the statement the host evaluates to deliver `text` to the page
pub fn inbound_call(text: &str) -> String {
    format!("{INBOUND_FUNCTION}({});", js_string_literal(text))
}

/// Recover the text from a statement produced by [`inbound_call`]
pub fn parse_inbound_call(script: &str) -> Option<String> {
    let literal = script
        .trim()
        .strip_prefix(INBOUND_FUNCTION)?
        .strip_prefix('(')?
        .strip_suffix(';')?
        .strip_suffix(')')?;
    serde_json::from_str(literal).ok()
}

/// Quote `text` as a JavaScript string literal.
///
/// JSON string encoding already escapes quotes, backslashes and control
/// characters; U+2028 and U+2029 are escaped too since older engines treat
/// them as line terminators inside literals.
pub fn js_string_literal(text: &str) -> String {
    serde_json::Value::from(text)
        .to_string()
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

#[cfg(test)]
#[path = "script/script_tests.rs"]
mod script_tests;
