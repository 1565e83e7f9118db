//! Seconds-since-epoch timestamp, plus a `Clock` trait so callers (notably NIP-42) can inject
//! a fixed time in tests.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixSeconds(i64);

impl UnixSeconds {
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }

    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self(secs as i64)
    }
}

impl fmt::Display for UnixSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Injectable "now" for deterministic construction of time-stamped events (NIP-42 §4.5).
pub trait Clock {
    fn now_seconds(&self) -> UnixSeconds;
}

/// The default clock: the system wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> UnixSeconds {
        UnixSeconds::now()
    }
}

/// A clock that always returns a fixed instant, for tests.
pub struct FixedClock(pub UnixSeconds);

impl Clock for FixedClock {
    fn now_seconds(&self) -> UnixSeconds {
        self.0
    }
}
