//! viewbridge-relay - Page-side message relay
//!
//! This crate provides:
//! - [`PageBridge`] the outbound and inbound relays for one page context
//! - [`HandlerSlot`] the single-subscriber callback slot inbound messages go to

mod bridge;
mod handler;

pub use bridge::PageBridge;
pub use handler::HandlerSlot;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{HandlerSlot, PageBridge};
}
