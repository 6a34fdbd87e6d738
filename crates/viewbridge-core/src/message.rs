//! The message type carried across the bridge

use crate::BridgeResult;
use serde::de::DeserializeOwned;

/// An arbitrary JSON value exchanged between the page and the native host.
///
/// No schema is enforced: the relays only require syntactically valid JSON.
pub type Message = serde_json::Value;

/// Page-global function that sends a message to the native host
pub const SEND_FUNCTION: &str = "sendToPlugin";

/// Page-global callback slot that application code assigns to receive messages
pub const HANDLER_SLOT: &str = "onPluginMessage";

/// Page-global entry point the native host evaluates to push a message in
pub const INBOUND_FUNCTION: &str = "onPluginMessageInternal";

/// Interpret a message as a typed value.
///
/// Intended for application code that knows its message shapes, typically a
/// `#[serde(tag = "type")]` enum. The relays never call this.
pub fn decode_message_as<T: DeserializeOwned>(message: &Message) -> BridgeResult<T> {
    Ok(T::deserialize(message)?)
}
