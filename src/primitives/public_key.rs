//! 32-byte x-only secp256k1 public key.

use std::fmt;

use crate::bech32_codec;
use crate::crypto::encoding::{hex_decode, hex_encode};
use crate::error::NostrError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// Parses 32 raw x-only bytes with no further validation (curve membership is checked by
    /// whichever primitive operation first consumes the key).
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, NostrError> {
        let bytes = hex_decode(hex)?;
        let array: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| NostrError::InvalidInput {
            name: "public_key",
            expected: String::from("32 bytes"),
            actual: format!("{} bytes", v.len()),
        })?;
        Ok(Self(array))
    }

    pub fn from_bech32(npub: &str) -> Result<Self, NostrError> {
        Ok(Self(bech32_codec::decode_npub(npub)?))
    }

    /// Accepts `npub1...` or 64-character hex, auto-detected.
    pub fn parse(s: &str) -> Result<Self, NostrError> {
        let trimmed = s.trim();
        if bech32_codec::is_npub(trimmed) {
            Self::from_bech32(trimmed)
        } else {
            Self::from_hex(trimmed)
        }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    pub fn to_bech32(&self) -> String {
        bech32_codec::encode_npub(&self.0)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
