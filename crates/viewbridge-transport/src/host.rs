//! Host delivery primitives
//!
//! The outbound relay is polymorphic over a single capability, handing a
//! serialized message to whatever primitive the embedding host exposes.

use tokio::sync::mpsc;
use viewbridge_core::{BridgeError, BridgeResult, TransportKind};

/// The capability the outbound relay delivers text through
pub trait HostTransport {
    /// Which host primitive this transport drives
    fn kind(&self) -> TransportKind;

    /// Hand serialized text to the host, unchanged.
    ///
    /// Delivery is fire-and-forget: returning `Ok` means the host accepted
    /// the text, not that anything consumed it.
    fn deliver(&self, text: &str) -> BridgeResult<()>;
}

impl<T: HostTransport + ?Sized> HostTransport for Box<T> {
    fn kind(&self) -> TransportKind {
        (**self).kind()
    }

    fn deliver(&self, text: &str) -> BridgeResult<()> {
        (**self).deliver(text)
    }
}

type NamedPost = Box<dyn Fn(&str, &str)>;
type Post = Box<dyn Fn(&str)>;

/// Posts through a named WebKit message handler
/// (`webkit.messageHandlers.<name>.postMessage`)
pub struct WebKitMessageHandler {
    name: String,
    post: NamedPost,
}

impl WebKitMessageHandler {
    /// Create a transport for the handler `name`.
    ///
    /// `post` receives the handler name and the message text.
    pub fn new<F>(name: impl Into<String>, post: F) -> Self
    where
        F: Fn(&str, &str) + 'static,
    {
        Self {
            name: name.into(),
            post: Box::new(post),
        }
    }

    /// The message handler name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl HostTransport for WebKitMessageHandler {
    fn kind(&self) -> TransportKind {
        TransportKind::Webkit
    }

    fn deliver(&self, text: &str) -> BridgeResult<()> {
        (self.post)(&self.name, text);
        Ok(())
    }
}

impl std::fmt::Debug for WebKitMessageHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebKitMessageHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Posts through the generic IPC primitive (`window.ipc.postMessage`)
pub struct IpcPostMessage {
    post: Post,
}

impl IpcPostMessage {
    /// Create a transport over the host's IPC post primitive.
    ///
    /// `post` receives the message text.
    pub fn new<F>(post: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        Self {
            post: Box::new(post),
        }
    }
}

impl HostTransport for IpcPostMessage {
    fn kind(&self) -> TransportKind {
        TransportKind::Ipc
    }

    fn deliver(&self, text: &str) -> BridgeResult<()> {
        (self.post)(text);
        Ok(())
    }
}

impl std::fmt::Debug for IpcPostMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpcPostMessage").finish_non_exhaustive()
    }
}

/// Delivers text into an unbounded channel drained by the host's own loop
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    kind: TransportKind,
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelTransport {
    /// Create a transport and the receiver the host drains
    pub fn new(kind: TransportKind) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { kind, sender }, receiver)
    }

    /// Check whether the receiving side has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl HostTransport for ChannelTransport {
    fn kind(&self) -> TransportKind {
        self.kind
    }

    fn deliver(&self, text: &str) -> BridgeResult<()> {
        self.sender.send(text.to_owned()).map_err(|_| {
            tracing::debug!(kind = %self.kind, "host receiver closed, message not delivered");
            BridgeError::Transport("host receiver closed".to_string())
        })
    }
}
