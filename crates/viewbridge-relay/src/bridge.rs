//! Outbound and inbound relays for one page context

use crate::HandlerSlot;
use serde::Serialize;
use viewbridge_core::{BridgeResult, Message, TransportKind};
use viewbridge_transport::{Codec, HostTransport, JsonCodec};

/// The page half of the bridge.
///
/// Constructed once per page context and passed to whatever code needs to
/// send or receive. All calls run to completion on the caller's thread.
pub struct PageBridge<T> {
    transport: T,
    codec: JsonCodec,
    handler: HandlerSlot,
}

impl<T: HostTransport> PageBridge<T> {
    /// Create a bridge delivering through `transport`, with no handler registered
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            codec: JsonCodec::new(),
            handler: HandlerSlot::new(),
        }
    }

    /// The host transport this bridge delivers through
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Which host primitive the outbound relay uses
    pub fn kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// Outbound relay: serialize `message` and hand the text to the host.
    ///
    /// If serialization fails nothing is delivered and the error is returned.
    pub fn send<M: Serialize + ?Sized>(&self, message: &M) -> BridgeResult<()> {
        let text = self.codec.encode(message)?;
        tracing::trace!(transport = %self.transport.kind(), len = text.len(), "sending message to host");
        self.transport.deliver(&text)
    }

    /// Inbound relay: parse `raw` and pass the value to the registered handler.
    ///
    /// Malformed text is rejected before dispatch, so the handler never sees
    /// it. With no handler registered a well-formed message is dropped
    /// silently.
    pub fn receive(&mut self, raw: &str) -> BridgeResult<()> {
        let message: Message = self.codec.decode(raw)?;
        if !self.handler.dispatch(message) {
            tracing::trace!("no message handler registered, dropping inbound message");
        }
        Ok(())
    }

    /// Register the inbound handler, replacing any previous one
    pub fn set_handler<F>(&mut self, handler: F)
    where
        F: FnMut(Message) + 'static,
    {
        self.handler.set(handler);
    }

    /// Reset the inbound handler to the no-op default
    pub fn clear_handler(&mut self) {
        self.handler.clear();
    }

    /// Check whether an inbound handler is registered
    pub fn has_handler(&self) -> bool {
        self.handler.is_set()
    }

    /// Tear down the bridge, returning its transport
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T: HostTransport> std::fmt::Debug for PageBridge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageBridge")
            .field("transport", &self.transport.kind())
            .field("handler", &self.handler)
            .finish()
    }
}
