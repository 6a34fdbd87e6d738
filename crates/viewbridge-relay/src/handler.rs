//! Single-subscriber handler slot

use viewbridge_core::Message;

type Handler = Box<dyn FnMut(Message)>;

/// Holds at most one inbound message handler.
///
/// Registering a handler discards the previous one. An empty slot behaves as
/// a no-op handler.
#[derive(Default)]
pub struct HandlerSlot {
    handler: Option<Handler>,
}

impl HandlerSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self { handler: None }
    }

    /// Replace the active handler
    pub fn set<F>(&mut self, handler: F)
    where
        F: FnMut(Message) + 'static,
    {
        self.handler = Some(Box::new(handler));
    }

    /// Reset the slot to the no-op default
    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// Check whether a handler was registered
    pub fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the active handler with `message`.
    ///
    /// Returns whether a handler ran.
    pub fn dispatch(&mut self, message: Message) -> bool {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(message);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for HandlerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
