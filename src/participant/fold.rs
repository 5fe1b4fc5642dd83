// Copyright 2025 Cowboy AI, LLC.

//! Participant fold
//!
//! This fold is entity-keyed: the aggregate folder resolves the participant
//! by the envelope's entity id and hands the per-seat state here. The legacy
//! `seat.reassigned` type shares the `participant.seat_reassigned` branch.

use super::payloads::{ParticipantJoined, ParticipantUpdated, SeatReassigned, UserBound, UserUnbound};
use super::state::ParticipantState;
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;

/// Event types this fold handles
pub fn handled_types() -> &'static [&'static str] {
    &[
        types::JOINED,
        types::UPDATED,
        types::LEFT,
        types::USER_BOUND,
        types::USER_UNBOUND,
        types::SEAT_REASSIGNED,
        types::SEAT_REASSIGNED_LEGACY,
    ]
}

/// Fold one participant event into the seat's state
pub fn fold(state: &mut ParticipantState, event: &EventEnvelope) -> Result<(), FoldError> {
    if event.entity_id.trim().is_empty() {
        return Err(FoldError::EntityIdRequired {
            event_type: event.event_type.clone(),
        });
    }

    match event.event_type.as_str() {
        types::JOINED => {
            let payload: ParticipantJoined = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.joined = true;
            state.participant_id = event.entity_id.clone();
            state.name = payload.name;
            state.role = Some(payload.role);
            state.access = Some(payload.access);
            state.controller = Some(payload.controller);
        }
        types::UPDATED => {
            let payload: ParticipantUpdated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            if let Some(name) = payload.name {
                state.name = name;
            }
            if let Some(role) = payload.role {
                state.role = Some(role);
            }
            if let Some(controller) = payload.controller {
                state.controller = Some(controller);
            }
        }
        types::LEFT => {
            state.left = true;
        }
        types::USER_BOUND => {
            let payload: UserBound = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.user_id = payload.user_id;
        }
        types::USER_UNBOUND => {
            let _: UserUnbound = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.user_id.clear();
        }
        types::SEAT_REASSIGNED | types::SEAT_REASSIGNED_LEGACY => {
            let payload: SeatReassigned = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.user_id = payload.user_id;
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
    use crate::envelope::{entity_types, CommandEnvelope};
    use crate::labels::{CampaignAccess, ControllerKind, ParticipantRole};
    use pretty_assertions::assert_eq;

    fn event(event_type: &str, payload: serde_json::Value) -> EventEnvelope {
        let command = CommandEnvelope::new("test", "camp-1");
        EventEnvelope::from_command(
            &command,
            event_type,
            FixedClock::at("2025-06-01T12:00:00Z").now(),
        )
        .with_entity(entity_types::PARTICIPANT, "p-1")
        .encode_payload(&payload)
        .unwrap()
    }

    fn joined_payload() -> serde_json::Value {
        serde_json::json!({
            "participant_id": "p-1",
            "name": "Robin",
            "role": "player",
            "access": "member",
            "controller": "human"
        })
    }

    #[test]
    fn joined_then_left_lifecycle() {
        let mut state = ParticipantState::default();
        fold(&mut state, &event(types::JOINED, joined_payload())).unwrap();
        assert!(state.is_active());
        assert_eq!(state.participant_id, "p-1");
        assert_eq!(state.role, Some(ParticipantRole::Player));
        assert_eq!(state.access, Some(CampaignAccess::Member));

        fold(&mut state, &event(types::LEFT, serde_json::json!({}))).unwrap();
        assert!(!state.is_active());
        assert!(state.left);
    }

    #[test]
    fn updated_applies_only_present_fields() {
        let mut state = ParticipantState::default();
        fold(&mut state, &event(types::JOINED, joined_payload())).unwrap();

        fold(
            &mut state,
            &event(types::UPDATED, serde_json::json!({"controller": "ai"})),
        )
        .unwrap();
        assert_eq!(state.controller, Some(ControllerKind::Ai));
        assert_eq!(state.name, "Robin");
        assert_eq!(state.role, Some(ParticipantRole::Player));
    }

    #[test]
    fn binding_lifecycle_and_legacy_alias() {
        let mut state = ParticipantState::default();
        fold(&mut state, &event(types::JOINED, joined_payload())).unwrap();

        fold(
            &mut state,
            &event(types::USER_BOUND, serde_json::json!({"user_id": "user-1"})),
        )
        .unwrap();
        assert_eq!(state.user_id, "user-1");

        // Legacy spelling must behave exactly like the canonical type
        fold(
            &mut state,
            &event(
                types::SEAT_REASSIGNED_LEGACY,
                serde_json::json!({"user_id": "user-2", "prior_user_id": "user-1"}),
            ),
        )
        .unwrap();
        assert_eq!(state.user_id, "user-2");

        fold(
            &mut state,
            &event(types::USER_UNBOUND, serde_json::json!({"user_id": "user-2"})),
        )
        .unwrap();
        assert!(!state.is_bound());
    }

    #[test]
    fn empty_entity_id_is_a_programmer_error() {
        let command = CommandEnvelope::new("test", "camp-1");
        let bad = EventEnvelope::from_command(
            &command,
            types::JOINED,
            FixedClock::at("2025-06-01T12:00:00Z").now(),
        )
        .encode_payload(&joined_payload())
        .unwrap();

        let mut state = ParticipantState::default();
        let err = fold(&mut state, &bad).unwrap_err();
        assert!(matches!(err, FoldError::EntityIdRequired { .. }));
    }
}
