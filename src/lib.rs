//! Canonical Nostr event ids and Schnorr signing (NIP-01), legacy direct-message encryption
//! (NIP-04), versioned encryption (NIP-44 v2), and relay authentication events (NIP-42).
//!
//! This crate is a pure value-transform library: every public function is synchronous, does no
//! I/O, and touches no shared mutable state. Transport, subscription management, and relay wire
//! framing live above this layer.

pub mod bech32_codec;
pub mod crypto;
pub mod error;
pub mod event;
pub mod nip04;
pub mod nip42;
pub mod nip44;
pub mod primitives;
pub mod signer;

pub use error::{NostrError, Result};
pub use event::{Event, EventDraft};
pub use nip42::{AuthEventBuilder, RelayUrlNormalizer};
pub use primitives::{Clock, EventId, EventKind, FixedClock, PrivateKey, PublicKey, Signature, SystemClock, Tag, Tags, UnixSeconds};
pub use signer::{KeypairSigner, Signer};
