//! viewbridge-host - Native host side of the bridge
//!
//! This crate provides:
//! - [`HostContext`] queuing messages posted by the page and pushing
//!   messages back by script evaluation
//! - [`NativeView`] the seam to the platform web view
//! - [`ViewOptions`] and [`ViewSource`] describing the view to create
//! - [`FrontendAssets`] for serving a built frontend under a custom protocol

mod assets;
mod context;
mod event;
mod view;

pub use assets::{Asset, FrontendAssets};
pub use context::{HostContext, SharedHostContext, inbound_callback};
pub use event::WebviewEvent;
pub use view::{NativeView, ViewOptions, ViewSource};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FrontendAssets, HostContext, NativeView, SharedHostContext, ViewOptions, ViewSource,
        WebviewEvent,
    };
}
