//! NIP-44 v2 versioned encryption: ECDH conversation key, HKDF per-message keys, power-of-two
//! aligned padding, ChaCha20-IETF, HMAC-SHA-256 over nonce-prefixed ciphertext, versioned Base64
//! payload.

use crate::crypto::ecc;
use crate::crypto::encoding::{base64_decode, base64_encode};
use crate::crypto::hash::{hkdf_expand, hkdf_extract, hmac_sha256};
use crate::crypto::random::{constant_time_eq, secure_random};
use crate::crypto::stream::chacha20_ietf_xor;
use crate::error::NostrError;

const VERSION: u8 = 0x02;
const SALT: &[u8] = b"nip44-v2";
const MIN_PLAINTEXT_LEN: usize = 1;
const MAX_PLAINTEXT_LEN: usize = 65535;
const BASE64_LEN_MIN: usize = 132;
const BASE64_LEN_MAX: usize = 87472;
const RAW_LEN_MIN: usize = 99;
const RAW_LEN_MAX: usize = 65603;

pub struct MessageKeys {
    pub chacha_key: [u8; 32],
    pub chacha_nonce: [u8; 12],
    pub hmac_key: [u8; 32],
}

/// `HKDF-Extract(salt = "nip44-v2", ikm = shared_x)`.
pub fn conversation_key(priv_bytes: &[u8; 32], pub_bytes: &[u8]) -> Result<[u8; 32], NostrError> {
    let shared_x = ecc::ecdh_x(priv_bytes, pub_bytes)?;
    Ok(hkdf_extract(SALT, &shared_x))
}

/// `HKDF-Expand(prk = conversation_key, info = nonce, length = 76)`, split into the three keys.
pub fn message_keys(conversation_key: &[u8; 32], nonce: &[u8; 32]) -> Result<MessageKeys, NostrError> {
    let mut okm = [0u8; 76];
    hkdf_expand(conversation_key, nonce, &mut okm)?;
    let mut chacha_key = [0u8; 32];
    let mut chacha_nonce = [0u8; 12];
    let mut hmac_key = [0u8; 32];
    chacha_key.copy_from_slice(&okm[0..32]);
    chacha_nonce.copy_from_slice(&okm[32..44]);
    hmac_key.copy_from_slice(&okm[44..76]);
    Ok(MessageKeys {
        chacha_key,
        chacha_nonce,
        hmac_key,
    })
}

fn floor_log2(n: usize) -> u32 {
    usize::BITS - 1 - n.leading_zeros()
}

pub fn calc_padded_len(unpadded_len: usize) -> Result<usize, NostrError> {
    if !(1..=MAX_PLAINTEXT_LEN).contains(&unpadded_len) {
        return Err(NostrError::InvalidInput {
            name: "nip44_plaintext_len",
            expected: String::from("1..=65535"),
            actual: unpadded_len.to_string(),
        });
    }
    if unpadded_len <= 32 {
        return Ok(32);
    }
    let next_power = 1usize << (floor_log2(unpadded_len - 1) + 1);
    let chunk = if next_power <= 256 { 32 } else { next_power / 8 };
    Ok(chunk * (((unpadded_len - 1) / chunk) + 1))
}

pub fn pad(plaintext: &[u8]) -> Result<Vec<u8>, NostrError> {
    let len = plaintext.len();
    let padded_len = calc_padded_len(len)?;
    let mut out = Vec::with_capacity(2 + padded_len);
    out.extend_from_slice(&(len as u16).to_be_bytes());
    out.extend_from_slice(plaintext);
    out.resize(2 + padded_len, 0);
    Ok(out)
}

pub fn unpad(padded: &[u8]) -> Result<Vec<u8>, NostrError> {
    if padded.len() < 2 {
        return Err(NostrError::DecryptionFailed("invalid padding"));
    }
    let declared_len = u16::from_be_bytes([padded[0], padded[1]]) as usize;
    if declared_len == 0 {
        return Err(NostrError::DecryptionFailed("invalid padding"));
    }
    let padded_len = calc_padded_len(declared_len).map_err(|_| NostrError::DecryptionFailed("invalid padding"))?;
    if padded.len() != 2 + padded_len {
        return Err(NostrError::DecryptionFailed("invalid padding"));
    }
    let plaintext = &padded[2..2 + declared_len];
    let trailing = &padded[2 + declared_len..];
    if trailing.iter().any(|&b| b != 0) {
        return Err(NostrError::DecryptionFailed("invalid padding"));
    }
    Ok(plaintext.to_vec())
}

/// Encrypts `plaintext_utf8` with an explicit conversation key and nonce.
pub fn encrypt(plaintext: &str, conversation_key: &[u8; 32], nonce: &[u8; 32]) -> Result<String, NostrError> {
    let len = plaintext.len();
    if !(MIN_PLAINTEXT_LEN..=MAX_PLAINTEXT_LEN).contains(&len) {
        return Err(NostrError::InvalidInput {
            name: "nip44_plaintext_len",
            expected: String::from("1..=65535 UTF-8 bytes"),
            actual: len.to_string(),
        });
    }
    let keys = message_keys(conversation_key, nonce)?;
    let mut buf = pad(plaintext.as_bytes())?;
    chacha20_ietf_xor(&keys.chacha_key, &keys.chacha_nonce, &mut buf);
    let ciphertext = buf;

    let mut aad = Vec::with_capacity(32 + ciphertext.len());
    aad.extend_from_slice(nonce);
    aad.extend_from_slice(&ciphertext);
    let mac = hmac_sha256(&keys.hmac_key, &aad);

    let mut raw = Vec::with_capacity(1 + 32 + ciphertext.len() + 32);
    raw.push(VERSION);
    raw.extend_from_slice(nonce);
    raw.extend_from_slice(&ciphertext);
    raw.extend_from_slice(&mac);
    Ok(base64_encode(&raw))
}

/// Encrypts with a freshly drawn 32-byte nonce.
pub fn encrypt_random_nonce(plaintext: &str, conversation_key: &[u8; 32]) -> Result<String, NostrError> {
    let nonce = secure_random::<32>()?;
    encrypt(plaintext, conversation_key, &nonce)
}

/// Computes the conversation key from raw key material and encrypts with a fresh nonce.
pub fn encrypt_with_keys(
    plaintext: &str,
    sender_priv: &[u8; 32],
    recipient_pub: &[u8],
) -> Result<String, NostrError> {
    let ck = conversation_key(sender_priv, recipient_pub)?;
    encrypt_random_nonce(plaintext, &ck)
}

pub fn decrypt(payload: &str, conversation_key: &[u8; 32]) -> Result<String, NostrError> {
    if payload.is_empty() || payload.starts_with('#') {
        return Err(NostrError::Unsupported(String::from("nip44 version")));
    }
    if !(BASE64_LEN_MIN..=BASE64_LEN_MAX).contains(&payload.len()) {
        return Err(NostrError::InvalidInput {
            name: "nip44_payload_len",
            expected: format!("{BASE64_LEN_MIN}..={BASE64_LEN_MAX} base64 characters"),
            actual: payload.len().to_string(),
        });
    }
    let raw = base64_decode(payload)?;
    if !(RAW_LEN_MIN..=RAW_LEN_MAX).contains(&raw.len()) {
        return Err(NostrError::InvalidInput {
            name: "nip44_raw_len",
            expected: format!("{RAW_LEN_MIN}..={RAW_LEN_MAX} bytes"),
            actual: raw.len().to_string(),
        });
    }
    if raw[0] != VERSION {
        return Err(NostrError::Unsupported(format!("nip44 version {}", raw[0])));
    }

    let nonce: [u8; 32] = raw[1..33].try_into().expect("checked above");
    let mac_offset = raw.len() - 32;
    let ciphertext = &raw[33..mac_offset];
    let mac = &raw[mac_offset..];

    let keys = message_keys(conversation_key, &nonce)?;

    let mut aad = Vec::with_capacity(32 + ciphertext.len());
    aad.extend_from_slice(&nonce);
    aad.extend_from_slice(ciphertext);
    let expected_mac = hmac_sha256(&keys.hmac_key, &aad);
    if !constant_time_eq(&expected_mac, mac) {
        return Err(NostrError::DecryptionFailed("invalid MAC"));
    }

    let mut padded = ciphertext.to_vec();
    chacha20_ietf_xor(&keys.chacha_key, &keys.chacha_nonce, &mut padded);
    let plaintext = unpad(&padded)?;
    String::from_utf8(plaintext).map_err(|_| NostrError::DecryptionFailed("invalid UTF-8 plaintext"))
}
