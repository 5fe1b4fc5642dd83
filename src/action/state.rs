// Copyright 2025 Cowboy AI, LLC.

//! Action replay state

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved roll, keyed by its campaign sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RollRecord {
    /// Request that produced the roll
    pub request_id: String,
    /// Session the roll happened in
    pub session_id: String,
    /// System-specific outcome blob
    pub outcome: serde_json::Value,
}

/// An applied outcome, keyed by its campaign sequence
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppliedOutcome {
    /// The roll this outcome derives from
    pub roll_seq: u64,
    /// System-specific effect blob
    pub effect: serde_json::Value,
}

/// Append-only causal replay maps
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionState {
    /// Resolved rolls by sequence
    pub rolls: BTreeMap<u64, RollRecord>,
    /// Applied outcomes by sequence
    pub applied_outcomes: BTreeMap<u64, AppliedOutcome>,
}

impl ActionState {
    /// True when a roll with this sequence has been resolved
    pub fn has_roll(&self, seq: u64) -> bool {
        self.rolls.contains_key(&seq)
    }

    /// True when an outcome with this sequence has been applied
    pub fn has_applied_outcome(&self, seq: u64) -> bool {
        self.applied_outcomes.contains_key(&seq)
    }
}
