// Copyright 2025 Cowboy AI, LLC.

//! Action fold

use super::payloads::{OutcomeApplied, RollResolved};
use super::state::{ActionState, AppliedOutcome, RollRecord};
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;

/// Event types this fold handles
///
/// `action.roll_audited` is intentionally absent: it is audit-only and the
/// aggregate folder never dispatches it.
pub fn handled_types() -> &'static [&'static str] {
    &[types::ROLL_RESOLVED, types::OUTCOME_APPLIED]
}

/// Fold one action event into the action slice
pub fn fold(state: &mut ActionState, event: &EventEnvelope) -> Result<(), FoldError> {
    match event.event_type.as_str() {
        types::ROLL_RESOLVED => {
            let payload: RollResolved = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.rolls.insert(
                payload.seq,
                RollRecord {
                    request_id: event.request_id.clone(),
                    session_id: event.session_id.clone(),
                    outcome: payload.outcome,
                },
            );
        }
        types::OUTCOME_APPLIED => {
            let payload: OutcomeApplied = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.applied_outcomes.insert(
                payload.seq,
                AppliedOutcome {
                    roll_seq: payload.roll_seq,
                    effect: payload.effect,
                },
            );
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
        let command = CommandEnvelope::new("test", "camp-1")
            .with_session("sess-1")
            .with_request("req-7", "inv-1");
        EventEnvelope::from_command(
            &command,
            event_type,
            FixedClock::at("2025-06-01T12:00:00Z").now(),
        )
        .encode_payload(&payload)
        .unwrap()
    }

    #[test]
    fn roll_resolved_records_envelope_context() {
        let mut state = ActionState::default();
        fold(
            &mut state,
            &event(
                types::ROLL_RESOLVED,
                serde_json::json!({"seq": 3, "outcome": {"total": 17, "crit": true}}),
            ),
        )
        .unwrap();

        let roll = state.rolls.get(&3).unwrap();
        assert_eq!(roll.request_id, "req-7");
        assert_eq!(roll.session_id, "sess-1");
        assert_eq!(roll.outcome["total"], 17);
    }

    #[test]
    fn outcome_applied_links_back_to_roll() {
        let mut state = ActionState::default();
        fold(
            &mut state,
            &event(
                types::OUTCOME_APPLIED,
                serde_json::json!({"seq": 4, "roll_seq": 3, "effect": {"hp": -5}}),
            ),
        )
        .unwrap();

        let outcome = state.applied_outcomes.get(&4).unwrap();
        assert_eq!(outcome.roll_seq, 3);
        assert_eq!(outcome.effect["hp"], -5);
    }

    #[test]
    fn reapplying_the_same_event_is_idempotent() {
        let mut state = ActionState::default();
        let resolved = event(
            types::ROLL_RESOLVED,
            serde_json::json!({"seq": 1, "outcome": {"total": 9}}),
        );
        fold(&mut state, &resolved).unwrap();
        let once = state.clone();
        fold(&mut state, &resolved).unwrap();
        assert_eq!(state, once);
    }
}
