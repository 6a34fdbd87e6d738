//! Codec trait and JSON implementation

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use viewbridge_core::BridgeError;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CodecError::Deserialization(err.to_string())
        } else {
            CodecError::Serialization(err.to_string())
        }
    }
}

impl From<CodecError> for BridgeError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Serialization(msg) => BridgeError::Serialization(msg),
            CodecError::Deserialization(msg) | CodecError::InvalidFormat(msg) => {
                BridgeError::Deserialization(msg)
            }
        }
    }
}

/// Trait for message encoding and decoding
///
/// The bridge wire format is text, so codecs work on `str` rather than bytes.
pub trait Codec {
    /// Encode a value to text
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError>;

    /// Decode text to a value
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;
}

/// JSON codec implementation using serde_json.
///
/// Output is compact: one single-line document per message.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        // A failure while writing is always a serialization failure, even when
        // serde_json classifies it as a data error (e.g. a non-string map key).
        serde_json::to_string(value).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        serde_json::from_str(text).map_err(Into::into)
    }
}
