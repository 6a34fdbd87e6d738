//! Bridge configuration types

use crate::{BridgeError, BridgeResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which host delivery primitive the page uses to post messages out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// A named WebKit message handler (`webkit.messageHandlers.<name>.postMessage`)
    #[serde(alias = "webkit_message_handler")]
    Webkit,
    /// The generic IPC primitive (`window.ipc.postMessage`)
    #[default]
    Ipc,
}

impl TransportKind {
    /// The name used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportKind::Webkit => "webkit",
            TransportKind::Ipc => "ipc",
        }
    }
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "webkit" | "webkit_message_handler" => Ok(TransportKind::Webkit),
            "ipc" => Ok(TransportKind::Ipc),
            other => Err(BridgeError::Config(format!("unknown transport: {other}"))),
        }
    }
}

/// Configuration shared by the page bootstrap script and the native host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Host delivery primitive used by the outbound relay
    #[serde(default)]
    pub transport: TransportKind,

    /// Name of the WebKit message handler (only used by [`TransportKind::Webkit`])
    #[serde(default = "default_handler_name")]
    pub handler_name: String,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable developer extras (inspector, console mirroring)
    #[serde(default)]
    pub developer_mode: bool,

    /// Initial view width in logical pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial view height in logical pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color painted before the page loads, as RGBA
    #[serde(default)]
    pub background_color: Option<[u8; 4]>,

    /// Custom protocol name used to serve frontend assets
    #[serde(default = "default_protocol_name")]
    pub protocol_name: String,
}

fn default_handler_name() -> String {
    "main".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_protocol_name() -> String {
    "assets".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            transport: TransportKind::default(),
            handler_name: default_handler_name(),
            log_level: default_log_level(),
            developer_mode: false,
            width: default_width(),
            height: default_height(),
            background_color: None,
            protocol_name: default_protocol_name(),
        }
    }
}

impl BridgeConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> BridgeResult<Self> {
        toml::from_str(content).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| BridgeError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }

    /// Parsed log level
    pub fn log_level(&self) -> BridgeResult<LogLevel> {
        LogLevel::parse(&self.log_level)
            .ok_or_else(|| BridgeError::Config(format!("unknown log level: {}", self.log_level)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> BridgeResult<()> {
        // The handler name is spliced into page script as a property name
        if !is_js_identifier(&self.handler_name) {
            return Err(BridgeError::Config(format!(
                "invalid handler name: {:?}",
                self.handler_name
            )));
        }

        if !is_scheme_name(&self.protocol_name) {
            return Err(BridgeError::Config(format!(
                "invalid protocol name: {:?}",
                self.protocol_name
            )));
        }

        if self.width == 0 || self.height == 0 {
            return Err(BridgeError::Config(format!(
                "view size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        self.log_level()?;

        Ok(())
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_scheme_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '+' || c == '.')
}
