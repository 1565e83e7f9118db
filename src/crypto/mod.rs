//! Primitive bindings layer: thin wrappers over the ECC library and symmetric primitives.
//! Nothing above this module talks to `secp256k1`/`aes`/`chacha20`/`sha2` directly.

pub mod aes_cbc;
pub mod ecc;
pub mod encoding;
pub mod hash;
pub mod random;
pub mod stream;
