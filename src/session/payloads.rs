// Copyright 2025 Cowboy AI, LLC.

//! Session command and event payloads

use serde::{Deserialize, Serialize};

/// `session.open_gate` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGate {
    /// Gate id
    pub gate_id: String,
    /// Gate type label
    pub gate_type: String,
}

/// `session.resolve_gate` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveGate {
    /// Gate being resolved; must match the open gate
    pub gate_id: String,
    /// Recorded decision, e.g. `approve`
    pub decision: String,
}

/// `session.set_spotlight` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSpotlight {
    /// Character taking the spotlight
    pub character_id: String,
}

/// `session.clear_spotlight` payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClearSpotlight {}

/// `session.gate_opened` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOpened {
    /// Gate id
    pub gate_id: String,
    /// Gate type label
    pub gate_type: String,
}

/// `session.gate_resolved` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResolved {
    /// Gate that was resolved
    pub gate_id: String,
    /// Recorded decision
    pub decision: String,
}

/// `session.spotlight_set` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotlightSet {
    /// Character holding the spotlight
    pub character_id: String,
}

/// `session.spotlight_cleared` payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotlightCleared {}
