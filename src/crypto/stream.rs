//! ChaCha20 IETF (32-bit block counter, starting at 0).

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20;

pub fn chacha20_ietf_xor(key: &[u8; 32], nonce: &[u8; 12], data: &mut [u8]) {
    let mut cipher = ChaCha20::new(key.into(), nonce.into());
    cipher.apply_keystream(data);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_its_own_inverse() {
        let key = [0x42u8; 32];
        let nonce = [0x07u8; 12];
        let plaintext = b"the quick brown fox".to_vec();
        let mut buf = plaintext.clone();
        chacha20_ietf_xor(&key, &nonce, &mut buf);
        assert_ne!(buf, plaintext);
        chacha20_ietf_xor(&key, &nonce, &mut buf);
        assert_eq!(buf, plaintext);
    }
}
