// Copyright 2025 Cowboy AI, LLC.

//! Character fold
//!
//! Field values in `character.updated` were normalized by the decider;
//! anything that does not parse here means the journal was corrupted after
//! the fact, which is a fatal fold error.

use super::payloads::{CharacterCreated, CharacterProfileUpdated, CharacterUpdated};
use super::state::CharacterState;
use super::types;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;
use crate::labels::CharacterKind;

/// Event types this fold handles
pub fn handled_types() -> &'static [&'static str] {
    &[
        types::CREATED,
        types::UPDATED,
        types::DELETED,
        types::PROFILE_UPDATED,
    ]
}

fn decode_error(event_type: &str, message: impl Into<String>) -> FoldError {
    FoldError::PayloadDecode {
        event_type: event_type.to_string(),
        message: message.into(),
    }
}

/// Fold one character event into the character's state
pub fn fold(state: &mut CharacterState, event: &EventEnvelope) -> Result<(), FoldError> {
    if event.entity_id.trim().is_empty() {
        return Err(FoldError::EntityIdRequired {
            event_type: event.event_type.clone(),
        });
    }

    match event.event_type.as_str() {
        types::CREATED => {
            let payload: CharacterCreated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.created = true;
            state.character_id = event.entity_id.clone();
            state.name = payload.name;
            state.kind = Some(payload.kind);
            state.notes = payload.notes;
            state.participant_id = payload.participant_id;
            state.owner_participant_id = payload.owner_participant_id;
            state.avatar_set_id = payload.avatar_set_id;
            state.avatar_asset_id = payload.avatar_asset_id;
            state.pronouns = payload.pronouns;
            state.aliases = payload.aliases;
        }
        types::UPDATED => {
            let payload: CharacterUpdated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            for (field, value) in payload.fields {
                apply_field(state, &event.event_type, &field, value)?;
            }
        }
        types::DELETED => {
            state.deleted = true;
        }
        types::PROFILE_UPDATED => {
            let payload: CharacterProfileUpdated = event
                .payload_json
                .decode()
                .map_err(|e| FoldError::payload_decode(&event.event_type, e))?;
            state.system_profile = payload.profile;
        }
        other => {
            return Err(FoldError::UnhandledEventType {
                event_type: other.to_string(),
            })
        }
    }
    Ok(())
}

fn apply_field(
    state: &mut CharacterState,
    event_type: &str,
    field: &str,
    value: serde_json::Value,
) -> Result<(), FoldError> {
    let as_string = |value: serde_json::Value| -> Result<String, FoldError> {
        match value {
            serde_json::Value::String(s) => Ok(s),
            other => Err(decode_error(
                event_type,
                format!("field {field} must be a string, got {other}"),
            )),
        }
    };

    match field {
        "name" => state.name = as_string(value)?,
        "kind" => {
            let raw = as_string(value)?;
            state.kind = Some(
                CharacterKind::parse_label(&raw)
                    .map_err(|e| decode_error(event_type, e.to_string()))?,
            );
        }
        "notes" => state.notes = as_string(value)?,
        "participant_id" => state.participant_id = as_string(value)?,
        "owner_participant_id" => state.owner_participant_id = as_string(value)?,
        "avatar_set_id" => state.avatar_set_id = as_string(value)?,
        "avatar_asset_id" => state.avatar_asset_id = as_string(value)?,
        "pronouns" => state.pronouns = as_string(value)?,
        "aliases" => {
            let entries = match value {
                serde_json::Value::Array(entries) => entries,
                other => {
                    return Err(decode_error(
                        event_type,
                        format!("field aliases must be an array, got {other}"),
                    ))
                }
            };
            let mut aliases = Vec::with_capacity(entries.len());
            for entry in entries {
                aliases.push(as_string(entry)?);
            }
            state.aliases = aliases;
        }
        other => {
            return Err(decode_error(
                event_type,
                format!("unknown updated field {other}"),
            ))
        }
    }
    Ok(())
}
