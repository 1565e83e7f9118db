//! 32-byte secp256k1 private key. Validated to be in range `1 <= k < n` at construction;
//! zeroed on drop. Never exposes its bytes through `Debug`.

use std::fmt;

use secp256k1::SecretKey;
use zeroize::Zeroize;

use crate::bech32_codec;
use crate::crypto::ecc::derive_x_only_pub;
use crate::crypto::encoding::{hex_decode, hex_encode};
use crate::error::NostrError;
use crate::primitives::public_key::PublicKey;

pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, NostrError> {
        SecretKey::from_slice(&bytes).map_err(|e| NostrError::InvalidPrivateKey(e.to_string()))?;
        Ok(Self(bytes))
    }

    pub fn from_hex(hex: &str) -> Result<Self, NostrError> {
        let bytes = hex_decode(hex)?;
        let array: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| NostrError::InvalidInput {
            name: "private_key",
            expected: String::from("32 bytes"),
            actual: format!("{} bytes", v.len()),
        })?;
        Self::from_bytes(array)
    }

    pub fn from_bech32(nsec: &str) -> Result<Self, NostrError> {
        Self::from_bytes(bech32_codec::decode_nsec(nsec)?)
    }

    /// Accepts `nsec1...` or 64-character hex, auto-detected.
    pub fn parse(s: &str) -> Result<Self, NostrError> {
        let trimmed = s.trim();
        if bech32_codec::is_nsec(trimmed) {
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
        bech32_codec::encode_nsec(&self.0)
    }

    pub fn public_key(&self) -> Result<PublicKey, NostrError> {
        Ok(PublicKey::from_bytes(derive_x_only_pub(&self.0)?))
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"..").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let sk = PrivateKey::from_bytes([0x01u8; 32]).unwrap();
        let back = PrivateKey::parse(&sk.to_hex()).unwrap();
        assert_eq!(back.as_bytes(), sk.as_bytes());
    }

    #[test]
    fn bech32_roundtrip() {
        let sk = PrivateKey::from_bytes([0x01u8; 32]).unwrap();
        let back = PrivateKey::parse(&sk.to_bech32()).unwrap();
        assert_eq!(back.as_bytes(), sk.as_bytes());
    }

    #[test]
    fn rejects_zero_scalar() {
        assert!(PrivateKey::from_bytes([0u8; 32]).is_err());
    }

    #[test]
    fn debug_never_prints_bytes() {
        let sk = PrivateKey::from_bytes([0xABu8; 32]).unwrap();
        assert!(!format!("{sk:?}").contains("ab"));
    }
}
