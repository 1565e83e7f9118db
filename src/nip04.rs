//! Legacy NIP-04 direct-message encryption: ECDH x-coordinate as an AES-256-CBC key, with a
//! `<cipher_b64>?iv=<iv_b64>` wire format. Kept only for backward compatibility; new code should
//! prefer [`crate::nip44`].

use crate::crypto::aes_cbc;
use crate::crypto::ecc;
use crate::crypto::encoding::{base64_decode, base64_encode};
use crate::crypto::random::secure_random;
use crate::error::NostrError;

const IV_SEPARATOR: &str = "?iv=";

fn shared_secret(priv_bytes: &[u8; 32], pub_bytes: &[u8]) -> Result<[u8; 32], NostrError> {
    ecc::ecdh_x(priv_bytes, pub_bytes)
}

/// Encrypts with a caller-supplied 16-byte IV, for deterministic test vectors.
pub fn encrypt_with_iv(
    plaintext: &str,
    sender_priv: &[u8; 32],
    recipient_pub: &[u8],
    iv: &[u8; 16],
) -> Result<String, NostrError> {
    let key = shared_secret(sender_priv, recipient_pub)?;
    let ciphertext = aes_cbc::encrypt(&key, iv, plaintext.as_bytes());
    Ok(format!(
        "{}{IV_SEPARATOR}{}",
        base64_encode(&ciphertext),
        base64_encode(iv)
    ))
}

/// Encrypts with a freshly drawn random IV.
pub fn encrypt(
    plaintext: &str,
    sender_priv: &[u8; 32],
    recipient_pub: &[u8],
) -> Result<String, NostrError> {
    let iv = secure_random::<16>()?;
    encrypt_with_iv(plaintext, sender_priv, recipient_pub, &iv)
}

pub fn decrypt(
    payload: &str,
    recipient_priv: &[u8; 32],
    sender_pub: &[u8],
) -> Result<String, NostrError> {
    let Some(sep_index) = payload.find(IV_SEPARATOR) else {
        return Err(NostrError::InvalidInput {
            name: "nip04_payload",
            expected: String::from("\"<cipher>?iv=<iv>\""),
            actual: String::from("missing \"?iv=\" separator"),
        });
    };
    let (cipher_b64, rest) = payload.split_at(sep_index);
    let iv_b64 = &rest[IV_SEPARATOR.len()..];
    if cipher_b64.is_empty() || iv_b64.is_empty() {
        return Err(NostrError::InvalidInput {
            name: "nip04_payload",
            expected: String::from("non-empty cipher and iv segments"),
            actual: String::from("empty segment"),
        });
    }

    let cipher = base64_decode(cipher_b64)?;
    let iv = base64_decode(iv_b64)?;

    let iv: [u8; 16] = iv.try_into().map_err(|v: Vec<u8>| NostrError::InvalidInput {
        name: "nip04_iv",
        expected: String::from("16 bytes"),
        actual: format!("{} bytes", v.len()),
    })?;
    if cipher.is_empty() || cipher.len() % 16 != 0 {
        return Err(NostrError::InvalidInput {
            name: "nip04_ciphertext",
            expected: String::from("a positive multiple of 16 bytes"),
            actual: format!("{} bytes", cipher.len()),
        });
    }

    let key = shared_secret(recipient_priv, sender_pub)?;
    let plaintext = aes_cbc::decrypt(&key, &iv, &cipher)?;
    String::from_utf8(plaintext).map_err(|_| NostrError::DecryptionFailed("invalid UTF-8 plaintext"))
}
