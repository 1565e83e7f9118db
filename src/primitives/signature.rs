//! 64-byte BIP-340 Schnorr signature.

use std::fmt;

use crate::crypto::encoding::{hex_decode, hex_encode};
use crate::error::NostrError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, NostrError> {
        let bytes = hex_decode(hex)?;
        let array: [u8; 64] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| NostrError::InvalidInput {
                name: "signature",
                expected: String::from("64 bytes"),
                actual: format!("{} bytes", v.len()),
            })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let bytes = [0x07u8; 64];
        let sig = Signature::from_bytes(bytes);
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
    }
}
