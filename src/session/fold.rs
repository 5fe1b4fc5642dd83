// Copyright 2025 Cowboy AI, LLC.

//! Session fold

use super::payloads::{GateOpened, GateResolved, SpotlightSet};
use super::state::SessionState;
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;

/// Event types this fold handles
pub fn handled_types() -> &'static [&'static str] {
    &[
        types::GATE_OPENED,
        types::GATE_RESOLVED,
        types::SPOTLIGHT_SET,
        types::SPOTLIGHT_CLEARED,
    ]
}

/// Fold one session event into the session slice
pub fn fold(state: &mut SessionState, event: &EventEnvelope) -> Result<(), FoldError> {
    match event.event_type.as_str() {
        types::GATE_OPENED => {
            let payload: GateOpened = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.gate_open = true;
            state.gate_id = payload.gate_id;
            state.gate_type = payload.gate_type;
            state.last_gate_decision.clear();
        }
        types::GATE_RESOLVED => {
            let payload: GateResolved = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            // The gate closes but its id is retained for continuity.
            state.gate_open = false;
            state.gate_id = payload.gate_id;
            state.last_gate_decision = payload.decision;
        }
        types::SPOTLIGHT_SET => {
            let payload: SpotlightSet = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.spotlight_character_id = payload.character_id;
        }
        types::SPOTLIGHT_CLEARED => {
            state.spotlight_character_id.clear();
        }
        other => {
            return Err(FoldError::UnhandledEventType {
                event_type: other.to_string(),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::envelope::CommandEnvelope;
    use pretty_assertions::assert_eq;

    fn event(event_type: &str, payload: serde_json::Value) -> EventEnvelope {
        let command = CommandEnvelope::new("test", "camp-1");
        EventEnvelope::from_command(
            &command,
            event_type,
            FixedClock::at("2025-06-01T12:00:00Z").now(),
        )
        .encode_payload(&payload)
        .unwrap()
    }

    #[test]
    fn gate_opens_then_resolves_keeping_id() {
        let mut state = SessionState::default();

        fold(
            &mut state,
            &event(
                types::GATE_OPENED,
                serde_json::json!({"gate_id": "gate-1", "gate_type": "gm_consequence"}),
            ),
        )
        .unwrap();
        assert!(state.gate_open);
        assert_eq!(state.gate_id, "gate-1");

        fold(
            &mut state,
            &event(
                types::GATE_RESOLVED,
                serde_json::json!({"gate_id": "gate-1", "decision": "approve"}),
            ),
        )
        .unwrap();
        assert!(!state.gate_open);
        assert_eq!(state.gate_id, "gate-1");
        assert_eq!(state.last_gate_decision, "approve");
    }

    #[test]
    fn spotlight_set_and_cleared() {
        let mut state = SessionState::default();

        fold(
            &mut state,
            &event(types::SPOTLIGHT_SET, serde_json::json!({"character_id": "char-1"})),
        )
        .unwrap();
        assert_eq!(state.spotlight_character_id, "char-1");
        assert!(state.has_spotlight());

        fold(
            &mut state,
            &event(types::SPOTLIGHT_CLEARED, serde_json::json!({})),
        )
        .unwrap();
        assert!(!state.has_spotlight());
    }
}
