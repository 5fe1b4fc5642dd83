// Copyright 2025 Cowboy AI, LLC.

//! Identifier normalization and internal event identity
//!
//! Campaign, participant, character, and invite identifiers arrive from the
//! outside world as strings. They are never trusted raw: every decider trims
//! them, and an identifier that is empty after trimming is a rejection. The
//! helpers here keep that rule in one place.
//!
//! Event identity is internal and time-ordered (UUID v7), matching the
//! monotonic ordering the journal promises per campaign.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Trim an incoming identifier, returning `None` when nothing is left.
///
/// This is the single normalization rule for all string IDs in payloads and
/// envelopes: surrounding whitespace is never significant, and an
/// effectively-empty ID is treated as absent.
pub fn normalize_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trim an optional identifier; `None`, empty, and whitespace-only all
/// normalize to `None`.
pub fn normalize_optional_id(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_id)
}

/// Event ID - UUID v7 for time-ordered event identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Create a new EventId with UUID v7 (time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_id_trims_whitespace() {
        assert_eq!(normalize_id("  char-1  "), Some("char-1".to_string()));
        assert_eq!(normalize_id("char-1"), Some("char-1".to_string()));
    }

    #[test]
    fn normalize_id_rejects_effectively_empty() {
        assert_eq!(normalize_id(""), None);
        assert_eq!(normalize_id("   "), None);
        assert_eq!(normalize_id("\t\n"), None);
    }

    #[test]
    fn normalize_optional_id_flattens_absent_and_empty() {
        assert_eq!(normalize_optional_id(None), None);
        assert_eq!(normalize_optional_id(Some("  ")), None);
        assert_eq!(
            normalize_optional_id(Some(" p-1 ")),
            Some("p-1".to_string())
        );
    }

    #[test]
    fn event_id_is_monotonic_non_decreasing_by_bytes() {
        // Generate a short sequence of EventIds and assert pairwise non-decreasing by bytes
        let mut ids: Vec<EventId> = Vec::new();
        for _ in 0..12 {
            ids.push(EventId::new());
        }
        for w in ids.windows(2) {
            let a = (w[0].0).as_bytes();
            let b = (w[1].0).as_bytes();
            assert!(a <= b, "EventId must be non-decreasing: {:?} <= {:?}", a, b);
        }
    }
}
