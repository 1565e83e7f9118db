//! AES-256-CBC/PKCS7, the symmetric cipher behind legacy NIP-04 direct messages.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use crate::error::NostrError;

type Aes256CbcEnc = Encryptor<aes::Aes256>;
type Aes256CbcDec = Decryptor<aes::Aes256>;

pub fn encrypt(key: &[u8; 32], iv: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let mut buf = vec![0u8; plaintext.len() + 16];
    buf[..plaintext.len()].copy_from_slice(plaintext);
    let len = plaintext.len();
    let ciphertext = Aes256CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_mut::<Pkcs7>(&mut buf, len)
        .expect("buffer has 16 bytes of headroom for one PKCS7 block");
    ciphertext.to_vec()
}

pub fn decrypt(key: &[u8; 32], iv: &[u8; 16], ciphertext: &[u8]) -> Result<Vec<u8>, NostrError> {
    let mut buf = ciphertext.to_vec();
    let plaintext = Aes256CbcDec::new(key.into(), iv.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(|_| NostrError::DecryptionFailed("invalid PKCS7 padding"))?;
    Ok(plaintext.to_vec())
}
