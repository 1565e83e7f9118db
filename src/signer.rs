//! Event signing. `Signer` is the seam a hardware key or remote signer implements; `KeypairSigner`
//! is the in-process reference implementation over a `PrivateKey`.

use crate::crypto::ecc;
use crate::error::NostrError;
use crate::primitives::{EventId, PrivateKey, PublicKey, Signature};

/// Something that can produce BIP-340 signatures for a fixed public key, without exposing the
/// private key material it holds.
pub trait Signer {
    fn public_key(&self) -> PublicKey;
    fn sign(&self, event_id: &EventId) -> Result<Signature, NostrError>;
}

/// Signs with an in-process secp256k1 keypair. Synthetic aux randomness (32 zero bytes) unless
/// `with_aux_rand` is used.
pub struct KeypairSigner {
    private_key: PrivateKey,
    public_key: PublicKey,
    aux_rand: Option<[u8; 32]>,
}

impl KeypairSigner {
    pub fn new(private_key: PrivateKey) -> Result<Self, NostrError> {
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
            aux_rand: None,
        })
    }

    /// Supplies fresh auxiliary randomness for every signature produced (BIP-340 §3.2.1).
    pub fn with_aux_rand(private_key: PrivateKey, aux_rand: [u8; 32]) -> Result<Self, NostrError> {
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
            aux_rand: Some(aux_rand),
        })
    }

    pub fn generate() -> Result<Self, NostrError> {
        loop {
            let bytes = crate::crypto::random::secure_random::<32>()?;
            if let Ok(private_key) = PrivateKey::from_bytes(bytes) {
                return Self::new(private_key);
            }
        }
    }
}

impl Signer for KeypairSigner {
    fn public_key(&self) -> PublicKey {
        self.public_key
    }

    fn sign(&self, event_id: &EventId) -> Result<Signature, NostrError> {
        let sig = ecc::schnorr_sign(event_id.as_bytes(), self.private_key.as_bytes(), self.aux_rand.as_ref())?;
        Ok(Signature::from_bytes(sig))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keypair_signs_and_verifies() {
        let signer = KeypairSigner::generate().unwrap();
        let id = EventId::from_bytes([0x77u8; 32]);
        let sig = signer.sign(&id).unwrap();
        assert!(ecc::schnorr_verify(
            sig.as_bytes(),
            id.as_bytes(),
            signer.public_key().as_bytes()
        ));
    }

    #[test]
    fn aux_rand_changes_signature_but_not_validity() {
        let private_key = PrivateKey::from_bytes([0x09u8; 32]).unwrap();
        let private_key_2 = PrivateKey::from_bytes([0x09u8; 32]).unwrap();
        let id = EventId::from_bytes([0x12u8; 32]);
        let default_signer = KeypairSigner::new(private_key).unwrap();
        let aux_signer = KeypairSigner::with_aux_rand(private_key_2, [0xAAu8; 32]).unwrap();
        let sig_a = default_signer.sign(&id).unwrap();
        let sig_b = aux_signer.sign(&id).unwrap();
        assert_ne!(sig_a.as_bytes(), sig_b.as_bytes());
        assert!(ecc::schnorr_verify(sig_b.as_bytes(), id.as_bytes(), aux_signer.public_key().as_bytes()));
    }
}
