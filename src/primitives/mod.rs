//! Typed, validating wrappers over fixed-size byte containers (spec §3). The type system
//! prevents accidentally passing a signature where an id is expected.

pub mod event_id;
pub mod event_kind;
pub mod private_key;
pub mod public_key;
pub mod signature;
pub mod tag;
pub mod unix_seconds;

pub use event_id::EventId;
pub use event_kind::EventKind;
pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use signature::Signature;
pub use tag::{Tag, Tags};
pub use unix_seconds::{Clock, FixedClock, SystemClock, UnixSeconds};
