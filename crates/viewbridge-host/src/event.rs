//! Events delivered from the web view to the host

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use viewbridge_core::{BridgeResult, Message, decode_message_as};

/// Something the web view reported to the host
#[derive(Debug, Clone, PartialEq)]
pub enum WebviewEvent {
    /// A message posted by the page through `sendToPlugin`
    Json(Message),
    /// A file is being dragged over the view
    FileHovered(PathBuf),
    /// A file was dropped onto the view
    FileDropped(PathBuf),
    /// A drag left the view without dropping
    FileHoverCancelled,
}

impl WebviewEvent {
    /// The message payload, if this is a [`WebviewEvent::Json`] event
    pub fn as_json(&self) -> Option<&Message> {
        match self {
            WebviewEvent::Json(message) => Some(message),
            _ => None,
        }
    }

    /// Decode the message payload as a typed value.
    ///
    /// Returns `None` for non-message events.
    pub fn json_as<T: DeserializeOwned>(&self) -> Option<BridgeResult<T>> {
        self.as_json().map(decode_message_as::<T>)
    }
}
