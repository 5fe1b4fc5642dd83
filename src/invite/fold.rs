// Copyright 2025 Cowboy AI, LLC.

//! Invite fold

use super::payloads::{InviteClaimed, InviteCreated, InviteUpdated};
use super::state::InviteState;
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;
use crate::labels::InviteStatus;

/// Event types this fold handles
pub fn handled_types() -> &'static [&'static str] {
    &[types::CREATED, types::CLAIMED, types::REVOKED, types::UPDATED]
}

/// Fold one invite event into the invite's state
pub fn fold(state: &mut InviteState, event: &EventEnvelope) -> Result<(), FoldError> {
    if event.entity_id.trim().is_empty() {
        return Err(FoldError::EntityIdRequired {
            event_type: event.event_type.clone(),
        });
    }

    match event.event_type.as_str() {
        types::CREATED => {
            let payload: InviteCreated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.created = true;
            state.invite_id = event.entity_id.clone();
            state.participant_id = payload.participant_id;
            state.recipient_user_id = payload.recipient_user_id;
            state.status = Some(payload.status);
        }
        types::CLAIMED => {
            let payload: InviteClaimed = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.status = Some(InviteStatus::Claimed);
            state.claimed_user_id = payload.user_id;
            state.claimed_jwt_id = payload.jwt_id;
        }
        types::REVOKED => {
            state.status = Some(InviteStatus::Revoked);
        }
        types::UPDATED => {
            let payload: InviteUpdated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.recipient_user_id = payload.recipient_user_id;
        }
        other => {
            return Err(FoldError::UnhandledEventType {
                event_type: other.to_string(),
            })
        }
    }
    Ok(())
}
