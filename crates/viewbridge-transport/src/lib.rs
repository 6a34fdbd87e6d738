//! viewbridge-transport - JSON codec, host transports, and page scripts
//!
//! This crate provides:
//! - [`Codec`] trait and [`JsonCodec`] for the text wire format
//! - [`HostTransport`] the `deliver(text)` capability, with one implementation
//!   per host delivery primitive
//! - [`bootstrap_script`] and [`inbound_call`] for the page-side script surface

mod codec;
mod host;
mod script;

pub use codec::{Codec, CodecError, JsonCodec};
pub use host::{ChannelTransport, HostTransport, IpcPostMessage, WebKitMessageHandler};
pub use script::{
    bootstrap_script, delivery_expression, inbound_call, js_string_literal, parse_inbound_call,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ChannelTransport, Codec, CodecError, HostTransport, IpcPostMessage, JsonCodec,
        WebKitMessageHandler, bootstrap_script, inbound_call,
    };
}
