//! Error types for viewbridge

use thiserror::Error;

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Error type for bridge operations
#[derive(Error, Debug)]
pub enum BridgeError {
    /// An outbound message could not be encoded as JSON text
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Inbound text was not a valid JSON document
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// The host delivery primitive refused the text
    #[error("transport error: {0}")]
    Transport(String),

    /// No native view is attached to receive the message
    #[error("no web view attached")]
    ViewDetached,

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A frontend asset was requested that does not exist
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            BridgeError::Serialization(_) => 1,
            BridgeError::Deserialization(_) => 2,
            BridgeError::Transport(_) => 3,
            BridgeError::ViewDetached => 4,
            BridgeError::Config(_) => 5,
            BridgeError::AssetNotFound(_) => 6,
            BridgeError::Io(_) => 7,
            BridgeError::Internal(_) => 8,
        }
    }

    /// Create an error from an error code and message
    pub fn from_code(code: u32, message: String) -> Self {
        match code {
            1 => BridgeError::Serialization(message),
            2 => BridgeError::Deserialization(message),
            3 => BridgeError::Transport(message),
            4 => BridgeError::ViewDetached,
            5 => BridgeError::Config(message),
            6 => BridgeError::AssetNotFound(message),
            7 => BridgeError::Io(message),
            _ => BridgeError::Internal(message),
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() || err.is_data() {
            BridgeError::Deserialization(err.to_string())
        } else {
            BridgeError::Serialization(err.to_string())
        }
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::Io(err.to_string())
    }
}
