// Copyright 2025 Cowboy AI, LLC.

//! Clock abstraction injected into deciders
//!
//! Deciders must not read wall-clock time directly; the only time they see
//! is the instant the provided clock hands them. Production wiring uses
//! [`SystemClock`]; tests use [`FixedClock`] so emitted timestamps are
//! reproducible.

use chrono::{DateTime, Utc};

/// Source of the current UTC instant
pub trait Clock: Send + Sync {
    /// Get the current UTC instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the operating system, in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Fixed clock at the given RFC 3339 instant; panics on malformed input
    /// so test setup fails loudly.
    pub fn at(rfc3339: &str) -> Self {
        Self(
            DateTime::parse_from_rfc3339(rfc3339)
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|e| panic!("bad fixed clock instant {rfc3339}: {e}")),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
