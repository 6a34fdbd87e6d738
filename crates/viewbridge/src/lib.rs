//! # viewbridge
//!
//! A JSON message bridge between an embedded web view and the native
//! application hosting it.
//!
//! The page half exposes three globals: `sendToPlugin(message)` posts a message
//! to the host, `onPluginMessage` is the single callback slot for messages
//! coming back, and `onPluginMessageInternal(text)` is the entry point the host
//! evaluates to deliver them. Every message is one JSON document carried as
//! UTF-8 text, with no envelope, correlation, or acknowledgement.
//!
//! ## Page side
//!
//! ```ignore
//! use viewbridge::prelude::*;
//!
//! let transport = IpcPostMessage::new(|text| host_post(text));
//! let mut bridge = PageBridge::new(transport);
//!
//! bridge.set_handler(|msg| println!("from host: {msg}"));
//! bridge.send(&serde_json::json!({"type": "init"}))?;
//!
//! // The host pushes text back in:
//! bridge.receive(r#"{"type":"param_change","value":0.5}"#)?;
//! ```
//!
//! ## Host side
//!
//! ```ignore
//! use viewbridge::prelude::*;
//!
//! let options = ViewOptions::new(ViewSource::Html(html.into()), (200, 200))
//!     .with_transport(TransportKind::Webkit, "main");
//! inject_user_script(&options.bootstrap_script());
//!
//! let context = HostContext::from_options(&options).into_shared();
//! let on_message = inbound_callback(context.clone());
//!
//! // Later, on the host's event loop:
//! let mut ctx = context.lock();
//! while let Some(event) = ctx.next_event() {
//!     if let Some(Ok(action)) = event.json_as::<Action>() {
//!         // ...
//!     }
//! }
//! ctx.send_json(&serde_json::json!({"type": "set_size", "width": 200, "height": 200}))?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`viewbridge_core`] - Errors, configuration, message type
//! - [`viewbridge_transport`] - Codec, host transports, page scripts
//! - [`viewbridge_relay`] - Page-side relay
//! - [`viewbridge_host`] - Native host side
//! - [`viewbridge_logging`] - Host log sink forwarding

pub use viewbridge_core::{
    BridgeConfig, BridgeError, BridgeResult, HANDLER_SLOT, INBOUND_FUNCTION, LogLevel, Message,
    SEND_FUNCTION, TransportKind, decode_message_as,
};

pub use viewbridge_transport::{
    ChannelTransport, Codec, CodecError, HostTransport, IpcPostMessage, JsonCodec,
    WebKitMessageHandler, bootstrap_script, delivery_expression, inbound_call,
    parse_inbound_call,
};

pub use viewbridge_relay::{HandlerSlot, PageBridge};

pub use viewbridge_host::{
    Asset, FrontendAssets, HostContext, NativeView, SharedHostContext, ViewOptions, ViewSource,
    WebviewEvent, inbound_callback,
};

pub use viewbridge_logging::{
    HostLoggingLayer, LogSink, LogSinkManager, console_statement, init_logging, level_of,
};

// Re-export common dependencies that host integrations need
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use viewbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BridgeConfig, BridgeError, BridgeResult, ChannelTransport, HostContext, HostTransport,
        IpcPostMessage, Message, NativeView, PageBridge, TransportKind, ViewOptions, ViewSource,
        WebKitMessageHandler, WebviewEvent, inbound_callback,
    };

    // Serde derives (commonly needed for typed message enums)
    pub use serde::{Deserialize, Serialize};
}
