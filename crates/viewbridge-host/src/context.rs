//! Host-side message context

use crate::{NativeView, ViewOptions, WebviewEvent};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use viewbridge_core::{BridgeError, BridgeResult, LogLevel, Message};
use viewbridge_logging::{LogSink, LogSinkManager, console_statement};
use viewbridge_transport::{Codec, JsonCodec, inbound_call};

/// A host context shared between the web view's message callback and the
/// host's own event loop
pub type SharedHostContext = Arc<Mutex<HostContext>>;

/// The attached view, shared with the console log sink
type ViewSlot = Arc<Mutex<Option<Box<dyn NativeView>>>>;

/// Host half of the bridge.
///
/// Collects events the page posts out, and pushes messages into the page by
/// evaluating a call to its inbound entry point.
pub struct HostContext {
    view: ViewSlot,
    events: VecDeque<WebviewEvent>,
    codec: JsonCodec,
    width: u32,
    height: u32,
}

impl HostContext {
    /// Create a context with no view attached
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            view: Arc::default(),
            events: VecDeque::new(),
            codec: JsonCodec::new(),
            width: size.0,
            height: size.1,
        }
    }

    /// Create a context sized from view options
    pub fn from_options(options: &ViewOptions) -> Self {
        Self::new(options.size())
    }

    /// Wrap the context for sharing with the web view's message callback
    pub fn into_shared(self) -> SharedHostContext {
        Arc::new(Mutex::new(self))
    }

    /// Attach the platform view messages are evaluated in
    pub fn attach_view(&mut self, view: Box<dyn NativeView>) {
        *self.view.lock() = Some(view);
        tracing::debug!(width = self.width, height = self.height, "web view attached");
    }

    /// Detach the platform view, returning it
    pub fn detach_view(&mut self) -> Option<Box<dyn NativeView>> {
        let view = self.view.lock().take();
        if view.is_some() {
            tracing::debug!("web view detached");
        }
        view
    }

    pub fn is_attached(&self) -> bool {
        self.view.lock().is_some()
    }

    /// Accept text posted by the page.
    ///
    /// Malformed text is rejected and nothing is queued.
    pub fn push_raw(&mut self, raw: &str) -> BridgeResult<()> {
        let message: Message = self.codec.decode(raw).map_err(|e| {
            tracing::warn!(error = %e, "rejected malformed message from web view");
            BridgeError::from(e)
        })?;
        self.events.push_back(WebviewEvent::Json(message));
        Ok(())
    }

    /// Queue an event reported by the platform view
    pub fn push_event(&mut self, event: WebviewEvent) {
        self.events.push_back(event);
    }

    /// Take the oldest pending event
    pub fn next_event(&mut self) -> Option<WebviewEvent> {
        self.events.pop_front()
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<WebviewEvent> {
        self.events.drain(..).collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Push a message into the page's inbound relay
    pub fn send_json<M: Serialize + ?Sized>(&self, message: &M) -> BridgeResult<()> {
        if !self.is_attached() {
            return Err(BridgeError::ViewDetached);
        }
        let script = inbound_call(&self.codec.encode(message)?);
        tracing::trace!(len = script.len(), "sending message to web view");
        let slot = self.view.lock();
        let view = slot.as_ref().ok_or(BridgeError::ViewDetached)?;
        view.evaluate_script(&script);
        Ok(())
    }

    /// Resize the view and record the new size
    pub fn resize(&mut self, width: u32, height: u32) -> BridgeResult<()> {
        self.view
            .lock()
            .as_mut()
            .ok_or(BridgeError::ViewDetached)?
            .set_size(width, height);
        self.width = width;
        self.height = height;
        tracing::debug!(width, height, "web view resized");
        Ok(())
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// A log sink that mirrors records into the attached view's console.
    ///
    /// Records are dropped while no view is attached, and while the view is
    /// busy evaluating another script.
    pub fn console_sink(&self) -> LogSink {
        let slot = Arc::clone(&self.view);
        Arc::new(move |level: LogLevel, target: &str, message: &str| {
            let Some(statement) = console_statement(level, target, message) else {
                return;
            };
            if let Some(view) = slot.try_lock().as_deref().and_then(Option::as_ref) {
                view.evaluate_script(&statement);
            }
        })
    }

    /// Route native log records through `manager` for this context.
    ///
    /// The forwarded level comes from the options. In developer mode records
    /// are also mirrored into the view's console; otherwise the manager's
    /// sink is left as it was.
    pub fn install_logging(&self, options: &ViewOptions, manager: &LogSinkManager) {
        manager.set_level(options.log_level());
        if options.developer_mode() {
            manager.set_sink(Some(self.console_sink()));
            tracing::debug!(level = %options.log_level(), "mirroring logs to web view console");
        }
    }

    /// Install the global host logging layer and route it for this context.
    ///
    /// Returns whether the layer became the global subscriber.
    pub fn init_logging(&self, options: &ViewOptions) -> bool {
        self.install_logging(options, LogSinkManager::global());
        viewbridge_logging::init_logging(options.log_level())
    }
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext")
            .field("attached", &self.is_attached())
            .field("pending_events", &self.events.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Build the callback a platform view invokes with text the page posts.
///
/// Malformed text is logged and dropped.
pub fn inbound_callback(context: SharedHostContext) -> impl Fn(&str) + Send + Sync + 'static {
    move |raw| {
        // push_raw already logs the rejection
        let _ = context.lock().push_raw(raw);
    }
}
