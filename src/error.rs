//! Error taxonomy shared by every fallible operation in this crate.

use std::fmt;

/// Errors produced by primitive, event, or protocol-level operations.
///
/// Variants distinguish precondition failures (`InvalidInput`, `InvalidPublicKey`,
/// `InvalidPrivateKey`, `DecodeError`) from cryptographic failures (`DecryptionFailed`) and
/// unrecognized wire versions (`Unsupported`). Callers should match on the variant, not the
/// message text; the text of `DecryptionFailed`/`Unsupported` is nonetheless held stable (see
/// the `nip44` module) for suites that string-match against published test vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NostrError {
    /// A size or format precondition failed.
    InvalidInput {
        name: &'static str,
        expected: String,
        actual: String,
    },
    /// A public key was malformed or out of range.
    InvalidPublicKey(String),
    /// A private key was malformed or out of range.
    InvalidPrivateKey(String),
    /// Hex or Base64 decoding failed.
    DecodeError(&'static str),
    /// A cryptographic check failed: bad MAC, PKCS7 padding, or NIP-44 padding.
    DecryptionFailed(&'static str),
    /// An unknown or unimplemented wire version/feature was requested.
    Unsupported(String),
    /// The underlying primitive library reported a failure.
    ProviderError {
        operation: &'static str,
        reason: String,
    },
}

impl fmt::Display for NostrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                name,
                expected,
                actual,
            } => write!(f, "invalid {name}: expected {expected}, got {actual}"),
            Self::InvalidPublicKey(reason) => write!(f, "invalid public key: {reason}"),
            Self::InvalidPrivateKey(reason) => write!(f, "invalid private key: {reason}"),
            Self::DecodeError(format) => write!(f, "decode error: invalid {format}"),
            Self::DecryptionFailed(reason) => write!(f, "decryption failed: {reason}"),
            Self::Unsupported(operation) => write!(f, "unsupported: {operation}"),
            Self::ProviderError { operation, reason } => {
                write!(f, "{operation} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for NostrError {}

pub type Result<T> = std::result::Result<T, NostrError>;
