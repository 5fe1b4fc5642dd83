// Copyright 2025 Cowboy AI, LLC.

//! Session gate and spotlight state

use serde::{Deserialize, Serialize};

/// Gate and spotlight of the active session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// True while a gate is open
    pub gate_open: bool,
    /// Id of the open gate; retained after resolution
    pub gate_id: String,
    /// Type of the open gate, e.g. `gm_consequence`
    pub gate_type: String,
    /// Decision recorded by the last resolution
    pub last_gate_decision: String,
    /// Character currently in the spotlight, empty when cleared
    pub spotlight_character_id: String,
}

impl SessionState {
    /// True when a character holds the spotlight
    pub fn has_spotlight(&self) -> bool {
        !self.spotlight_character_id.is_empty()
    }
}
