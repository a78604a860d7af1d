//! Domain primitives: TimeMs and Address.

use serde::{Deserialize, Serialize};

/// Instant in milliseconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeMs(pub i64);

impl TimeMs {
    pub fn new(ms: i64) -> Self {
        TimeMs(ms)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// This instant shifted forward by `duration_ms`.
    pub fn plus_ms(&self, duration_ms: i64) -> TimeMs {
        TimeMs(self.0.saturating_add(duration_ms))
    }

    /// Milliseconds from `self` until `later`, clamped to zero for past instants.
    pub fn millis_until(&self, later: TimeMs) -> i64 {
        (later.0 - self.0).max(0)
    }
}

impl std::fmt::Display for TimeMs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Wallet address. Stored as received; search and display-name lookup compare
/// the [`Address::normalized`] form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl Address {
    pub fn new(addr: impl Into<String>) -> Self {
        Address(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Trimmed, lowercased form used as the canonical matching key.
    pub fn normalized(&self) -> String {
        self.0.trim().to_ascii_lowercase()
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
