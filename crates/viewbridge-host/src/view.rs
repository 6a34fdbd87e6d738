//! The platform web view seam and the options used to create one

use viewbridge_core::{BridgeConfig, BridgeResult, LogLevel, TransportKind};
use viewbridge_transport::bootstrap_script;

/// A platform web view the host drives.
///
/// Platform integrations (WebKit, WebView2, wry) implement this; the host
/// context only ever evaluates script and resizes through it.
pub trait NativeView: Send {
    /// Evaluate a script in the page, ignoring its result
    fn evaluate_script(&self, script: &str);

    /// Resize the view's frame
    fn set_size(&mut self, width: u32, height: u32);
}

/// Where the page content comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSource {
    /// Inline HTML
    Html(String),
    /// A URL to navigate to
    Url(String),
}

/// Everything a platform integration needs to create the view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    source: ViewSource,
    width: u32,
    height: u32,
    background_color: Option<[u8; 4]>,
    developer_mode: bool,
    log_level: LogLevel,
    transport: TransportKind,
    handler_name: String,
}

impl ViewOptions {
    /// Options for `source` at the given initial size, with the IPC transport
    pub fn new(source: ViewSource, size: (u32, u32)) -> Self {
        let defaults = BridgeConfig::default();
        Self {
            source,
            width: size.0,
            height: size.1,
            background_color: None,
            developer_mode: false,
            log_level: LogLevel::Info,
            transport: defaults.transport,
            handler_name: defaults.handler_name,
        }
    }

    /// Options for `source` taken from a validated configuration
    pub fn from_config(source: ViewSource, config: &BridgeConfig) -> BridgeResult<Self> {
        config.validate()?;
        Ok(Self {
            source,
            width: config.width,
            height: config.height,
            background_color: config.background_color,
            developer_mode: config.developer_mode,
            log_level: config.log_level()?,
            transport: config.transport,
            handler_name: config.handler_name.clone(),
        })
    }

    pub fn with_background_color(mut self, rgba: [u8; 4]) -> Self {
        self.background_color = Some(rgba);
        self
    }

    pub fn with_developer_mode(mut self, enabled: bool) -> Self {
        self.developer_mode = enabled;
        self
    }

    /// Minimum level of native log records forwarded to the host sink
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Select the host delivery primitive the page script posts through
    pub fn with_transport(mut self, kind: TransportKind, handler_name: impl Into<String>) -> Self {
        self.transport = kind;
        self.handler_name = handler_name.into();
        self
    }

    pub fn source(&self) -> &ViewSource {
        &self.source
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background_color(&self) -> Option<[u8; 4]> {
        self.background_color
    }

    pub fn developer_mode(&self) -> bool {
        self.developer_mode
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn transport(&self) -> TransportKind {
        self.transport
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// The script to inject at document start
    pub fn bootstrap_script(&self) -> String {
        bootstrap_script(self.transport, &self.handler_name)
    }
}
