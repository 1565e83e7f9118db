//! 32-byte event id: SHA-256 of the canonical event array (spec §4.1).

use std::fmt;

use crate::crypto::encoding::{hex_decode, hex_encode};
use crate::error::NostrError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId([u8; 32]);

impl EventId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, NostrError> {
        let bytes = hex_decode(hex)?;
        let array: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| NostrError::InvalidInput {
            name: "event_id",
            expected: String::from("32 bytes"),
            actual: format!("{} bytes", v.len()),
        })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
