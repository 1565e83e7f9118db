//! secp256k1 bindings: Schnorr sign/verify (BIP-340), ECDH scalar multiplication, and public-key
//! parsing under a 32-byte x-only / 33-byte compressed / 65-byte uncompressed acceptance policy.

use secp256k1::ecdh::shared_secret_point;
use secp256k1::{schnorr, Keypair, Parity, PublicKey, Secp256k1, SecretKey, XOnlyPublicKey};

use crate::error::NostrError;

/// Parse a public key under the NIP-04/NIP-44 acceptance policy: 32-byte x-only (even parity
/// assumed), 33-byte compressed, or 65-byte uncompressed.
pub fn parse_accepted_public_key(bytes: &[u8]) -> Result<PublicKey, NostrError> {
    match bytes.len() {
        32 => {
            let xonly = XOnlyPublicKey::from_slice(bytes)
                .map_err(|e| NostrError::InvalidPublicKey(e.to_string()))?;
            Ok(PublicKey::from_x_only_public_key(xonly, Parity::Even))
        }
        33 => {
            if bytes[0] != 0x02 && bytes[0] != 0x03 {
                return Err(NostrError::InvalidPublicKey(String::from(
                    "compressed key must start with 0x02 or 0x03",
                )));
            }
            PublicKey::from_slice(bytes).map_err(|e| NostrError::InvalidPublicKey(e.to_string()))
        }
        65 => PublicKey::from_slice(bytes).map_err(|e| NostrError::InvalidPublicKey(e.to_string())),
        n => Err(NostrError::InvalidInput {
            name: "public_key",
            expected: String::from("32, 33, or 65 bytes"),
            actual: format!("{n} bytes"),
        }),
    }
}

fn parse_secret_key(bytes: &[u8; 32]) -> Result<SecretKey, NostrError> {
    SecretKey::from_slice(bytes).map_err(|e| NostrError::InvalidPrivateKey(e.to_string()))
}

/// Unhashed x-coordinate of `priv * pub`.
pub fn ecdh_x(priv_bytes: &[u8; 32], pub_bytes: &[u8]) -> Result<[u8; 32], NostrError> {
    let secret_key = parse_secret_key(priv_bytes)?;
    let public_key = parse_accepted_public_key(pub_bytes)?;
    let point = shared_secret_point(&public_key, &secret_key);
    let mut x = [0u8; 32];
    x.copy_from_slice(&point[0..32]);
    Ok(x)
}

/// Derive the x-only (BIP-340) public key for a secret key.
pub fn derive_x_only_pub(priv_bytes: &[u8; 32]) -> Result<[u8; 32], NostrError> {
    let secret_key = parse_secret_key(priv_bytes)?;
    let secp = Secp256k1::new();
    let keypair = Keypair::from_secret_key(&secp, &secret_key);
    let (xonly, _parity) = XOnlyPublicKey::from_keypair(&keypair);
    Ok(xonly.serialize())
}

/// BIP-340 Schnorr sign. `aux_rand` defaults to 32 zero bytes (synthetic mode) when omitted.
pub fn schnorr_sign(
    msg32: &[u8; 32],
    priv_bytes: &[u8; 32],
    aux_rand: Option<&[u8; 32]>,
) -> Result<[u8; 64], NostrError> {
    let secret_key = parse_secret_key(priv_bytes)?;
    let secp = Secp256k1::new();
    let keypair = Keypair::from_secret_key(&secp, &secret_key);
    let message = secp256k1::Message::from_digest(*msg32);
    let signature = match aux_rand {
        Some(aux) => secp.sign_schnorr_with_aux_rand(&message, &keypair, aux),
        None => secp.sign_schnorr_no_aux_rand(&message, &keypair),
    };
    Ok(*signature.as_ref())
}

pub fn schnorr_verify(sig64: &[u8; 64], msg32: &[u8; 32], xonly_pub32: &[u8; 32]) -> bool {
    let secp = Secp256k1::verification_only();
    let Ok(signature) = schnorr::Signature::from_slice(sig64) else {
        return false;
    };
    let Ok(xonly) = XOnlyPublicKey::from_slice(xonly_pub32) else {
        return false;
    };
    let message = secp256k1::Message::from_digest(*msg32);
    secp.verify_schnorr(&signature, &message, &xonly).is_ok()
}
