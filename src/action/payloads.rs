// Copyright 2025 Cowboy AI, LLC.

//! Action command and event payloads

use serde::{Deserialize, Serialize};

/// `action.resolve_roll` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRoll {
    /// Campaign sequence of the roll
    pub seq: u64,
    /// System-specific outcome blob
    pub outcome: serde_json::Value,
}

/// `action.apply_outcome` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    /// Campaign sequence of this application
    pub seq: u64,
    /// The resolved roll the outcome derives from
    pub roll_seq: u64,
    /// System-specific effect blob
    #[serde(default)]
    pub effect: serde_json::Value,
}

/// `action.roll_resolved` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResolved {
    /// Campaign sequence of the roll
    pub seq: u64,
    /// System-specific outcome blob
    pub outcome: serde_json::Value,
}

/// `action.outcome_applied` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeApplied {
    /// Campaign sequence of this application
    pub seq: u64,
    /// The resolved roll the outcome derives from
    pub roll_seq: u64,
    /// System-specific effect blob
    #[serde(default)]
    pub effect: serde_json::Value,
}
