//! Codecs - turn battle records into stored bytes and back.
//!
//! [`BitcodeCodec`] is the default compact binary format. [`JsonCodec`] keeps
//! stored values human-readable, which helps when inspecting a store by hand.
//! [`AnyCodec`] picks one of them at runtime from configuration.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Serializing a value to bytes failed.
    Encode(String),
    /// Deserializing stored bytes failed.
    Decode(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Encode(msg) => write!(f, "encode failed: {}", msg),
            CodecError::Decode(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

/// Object serializer used for persistence.
///
/// Round-trip fidelity is required for nested structs, sequences and `None`.
pub trait Codec: Send + Sync {
    /// Serialize a value into bytes.
    fn dumps<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Deserialize bytes previously produced by [`Codec::dumps`].
    fn loads<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError>;

    /// Short name, used in logs and configuration.
    fn name(&self) -> &'static str;
}

/// Binary codec backed by bitcode's serde support.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcodeCodec;

impl Codec for BitcodeCodec {
    fn dumps<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        bitcode::serialize(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn loads<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        bitcode::deserialize(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "bitcode"
    }
}

/// JSON codec backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn dumps<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn loads<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// A codec chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnyCodec {
    #[default]
    Bitcode,
    Json,
}

impl AnyCodec {
    /// Parse a codec name (`"bitcode"` or `"json"`, case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bitcode" => Some(AnyCodec::Bitcode),
            "json" => Some(AnyCodec::Json),
            _ => None,
        }
    }
}

impl Codec for AnyCodec {
    fn dumps<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            AnyCodec::Bitcode => BitcodeCodec.dumps(value),
            AnyCodec::Json => JsonCodec.dumps(value),
        }
    }

    fn loads<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            AnyCodec::Bitcode => BitcodeCodec.loads(bytes),
            AnyCodec::Json => JsonCodec.loads(bytes),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyCodec::Bitcode => BitcodeCodec.name(),
            AnyCodec::Json => JsonCodec.name(),
        }
    }
}
