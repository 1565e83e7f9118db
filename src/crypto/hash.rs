//! SHA-256, HMAC-SHA-256, and HKDF-Extract/Expand bindings.

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::error::NostrError;

type HmacSha256 = Hmac<Sha256>;

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    let result = mac.finalize().into_bytes();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// HKDF-Extract with the given salt, producing a 32-byte pseudorandom key.
pub fn hkdf_extract(salt: &[u8], input_key_material: &[u8]) -> [u8; 32] {
    hmac_sha256(salt, input_key_material)
}

/// HKDF-Expand (RFC 5869) of `prk` with `info`, writing exactly `out.len()` bytes.
pub fn hkdf_expand(prk: &[u8; 32], info: &[u8], out: &mut [u8]) -> Result<(), NostrError> {
    let hk = Hkdf::<Sha256>::from_prk(prk).map_err(|_| NostrError::ProviderError {
        operation: "hkdf_expand",
        reason: String::from("invalid PRK length"),
    })?;
    hk.expand(info, out).map_err(|_| NostrError::ProviderError {
        operation: "hkdf_expand",
        reason: String::from("requested output too long"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encoding::hex_encode;

    #[test]
    fn sha256_known_vector() {
        // SHA-256("") per FIPS 180-4.
        assert_eq!(
            hex_encode(&sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
