// Copyright 2025 Cowboy AI, LLC.

//! Character decider

use super::payloads::{
    CharacterCreated, CharacterDeleted, CharacterProfileUpdated, CharacterUpdated, CreateCharacter,
    DeleteCharacter, UpdateCharacter, UpdateProfile,
};
use super::state::CharacterState;
use super::{types, UPDATABLE_FIELDS};
use crate::catalog::AssetCatalogError;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{entity_types, CommandEnvelope, EventEnvelope};
use crate::identifiers::normalize_id;
use crate::labels::CharacterKind;
use std::collections::BTreeMap;

/// A non-empty character id is required
pub const CHARACTER_ID_REQUIRED: &str = "CHARACTER_ID_REQUIRED";
/// A non-empty character name is required
pub const CHARACTER_NAME_REQUIRED: &str = "CHARACTER_NAME_REQUIRED";
/// The kind label did not parse
pub const CHARACTER_KIND_INVALID: &str = "CHARACTER_KIND_INVALID";
/// A character with this id already exists
pub const CHARACTER_ALREADY_EXISTS: &str = "CHARACTER_ALREADY_EXISTS";
/// No character with this id exists
pub const CHARACTER_NOT_FOUND: &str = "CHARACTER_NOT_FOUND";
/// The character was deleted
pub const CHARACTER_DELETED: &str = "CHARACTER_DELETED";
/// An update must name at least one field
pub const CHARACTER_FIELDS_REQUIRED: &str = "CHARACTER_FIELDS_REQUIRED";
/// The update names a field outside the updatable set
pub const CHARACTER_FIELD_UNKNOWN: &str = "CHARACTER_FIELD_UNKNOWN";
/// A field value has the wrong JSON shape
pub const CHARACTER_FIELD_INVALID: &str = "CHARACTER_FIELD_INVALID";
/// The owner participant id must be non-empty when supplied
pub const OWNER_PARTICIPANT_ID_REQUIRED: &str = "OWNER_PARTICIPANT_ID_REQUIRED";
/// The avatar set was missing or unknown
pub const INVALID_AVATAR_SET: &str = "INVALID_AVATAR_SET";
/// The avatar asset was invalid in its set
pub const INVALID_AVATAR_ASSET: &str = "INVALID_AVATAR_ASSET";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

/// Decide a character command against the characters slice
pub fn decide(
    characters: &BTreeMap<String, CharacterState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    match command.command_type.as_str() {
        types::CREATE => decide_create(characters, command, ctx),
        types::UPDATE => decide_update(characters, command, ctx),
        types::DELETE => decide_delete(characters, command, ctx),
        types::UPDATE_PROFILE => decide_update_profile(characters, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("character subdomain does not handle {other}"),
        ),
    }
}

fn avatar_rejection(err: AssetCatalogError) -> Decision {
    match err {
        AssetCatalogError::SetNotFound(_) => Decision::reject(INVALID_AVATAR_SET, err.to_string()),
        AssetCatalogError::AssetInvalid { .. } => {
            Decision::reject(INVALID_AVATAR_ASSET, err.to_string())
        }
    }
}

fn active<'a>(
    characters: &'a BTreeMap<String, CharacterState>,
    character_id: &str,
) -> Result<&'a CharacterState, Decision> {
    match characters.get(character_id) {
        None => Err(Decision::reject(
            CHARACTER_NOT_FOUND,
            format!("character {character_id} does not exist"),
        )),
        Some(c) if !c.created => Err(Decision::reject(
            CHARACTER_NOT_FOUND,
            format!("character {character_id} does not exist"),
        )),
        Some(c) if c.deleted => Err(Decision::reject(
            CHARACTER_DELETED,
            format!("character {character_id} was deleted"),
        )),
        Some(c) => Ok(c),
    }
}

fn normalize_aliases(raw: &[String]) -> Vec<String> {
    raw.iter().filter_map(|a| normalize_id(a)).collect()
}

fn decide_create(
    characters: &BTreeMap<String, CharacterState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: CreateCharacter = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(character_id) = normalize_id(&payload.character_id) else {
        return Decision::reject(CHARACTER_ID_REQUIRED, "character_id is required");
    };
    let Some(name) = normalize_id(&payload.name) else {
        return Decision::reject(CHARACTER_NAME_REQUIRED, "character name is required");
    };
    let kind = match CharacterKind::parse_label(&payload.kind) {
        Ok(kind) => kind,
        Err(e) => return Decision::reject(CHARACTER_KIND_INVALID, e.to_string()),
    };
    if characters.get(&character_id).is_some_and(|c| c.created) {
        return Decision::reject(
            CHARACTER_ALREADY_EXISTS,
            format!("character {character_id} already exists"),
        );
    }

    let notes = payload.notes.trim().to_string();
    let participant_id = normalize_id(&payload.participant_id).unwrap_or_default();
    let owner_participant_id = normalize_id(&payload.owner_participant_id).unwrap_or_default();
    let pronouns = payload.pronouns.trim().to_string();
    let aliases = normalize_aliases(&payload.aliases);

    let set_hint = normalize_id(&payload.avatar_set_id);
    let asset_hint = normalize_id(&payload.avatar_asset_id).unwrap_or_default();
    let (avatar_set_id, avatar_asset_id) = match set_hint {
        None if asset_hint.is_empty() => (String::new(), String::new()),
        None => {
            return Decision::reject(
                INVALID_AVATAR_SET,
                "avatar_asset_id supplied without avatar_set_id",
            )
        }
        Some(set_id) => {
            match ctx
                .catalog
                .resolve_selection(entity_types::CHARACTER, &character_id, &set_id, &asset_hint)
            {
                Ok(resolved) => (resolved.set_id, resolved.asset_id),
                Err(err) => return avatar_rejection(err),
            }
        }
    };

    match EventEnvelope::from_command(command, types::CREATED, ctx.now())
        .with_entity(entity_types::CHARACTER, &character_id)
        .encode_payload(&CharacterCreated {
            character_id: character_id.clone(),
            name,
            kind,
            notes,
            participant_id,
            owner_participant_id,
            avatar_set_id,
            avatar_asset_id,
            pronouns,
            aliases,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

/// Extract a string field value or reject with the field name
fn field_string(field: &str, value: &serde_json::Value) -> Result<String, Decision> {
    match value.as_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(Decision::reject(
            CHARACTER_FIELD_INVALID,
            format!("field {field} must be a string"),
        )),
    }
}

fn decide_update(
    characters: &BTreeMap<String, CharacterState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: UpdateCharacter = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(character_id) = normalize_id(&payload.character_id) else {
        return Decision::reject(CHARACTER_ID_REQUIRED, "character_id is required");
    };
    let current = match active(characters, &character_id) {
        Ok(c) => c,
        Err(rejection) => return rejection,
    };
    if payload.fields.is_empty() {
        return Decision::reject(CHARACTER_FIELDS_REQUIRED, "update changes nothing");
    }

    let mut normalized: BTreeMap<String, serde_json::Value> = BTreeMap::new();
    for (field, value) in &payload.fields {
        if !UPDATABLE_FIELDS.contains(&field.as_str()) {
            return Decision::reject(
                CHARACTER_FIELD_UNKNOWN,
                format!("field {field} is not updatable"),
            );
        }
        match field.as_str() {
            "name" => {
                let raw = match field_string(field, value) {
                    Ok(s) => s,
                    Err(rejection) => return rejection,
                };
                let Some(name) = normalize_id(&raw) else {
                    return Decision::reject(CHARACTER_NAME_REQUIRED, "character name is required");
                };
                normalized.insert(field.clone(), serde_json::Value::String(name));
            }
            "kind" => {
                let raw = match field_string(field, value) {
                    Ok(s) => s,
                    Err(rejection) => return rejection,
                };
                match CharacterKind::parse_label(&raw) {
                    Ok(kind) => {
                        normalized.insert(
                            field.clone(),
                            serde_json::Value::String(kind.canonical().to_string()),
                        );
                    }
                    Err(e) => return Decision::reject(CHARACTER_KIND_INVALID, e.to_string()),
                }
            }
            "owner_participant_id" => {
                let raw = match field_string(field, value) {
                    Ok(s) => s,
                    Err(rejection) => return rejection,
                };
                let Some(owner) = normalize_id(&raw) else {
                    return Decision::reject(
                        OWNER_PARTICIPANT_ID_REQUIRED,
                        "owner_participant_id must be non-empty",
                    );
                };
                normalized.insert(field.clone(), serde_json::Value::String(owner));
            }
            "notes" | "participant_id" | "pronouns" | "avatar_set_id" | "avatar_asset_id" => {
                let raw = match field_string(field, value) {
                    Ok(s) => s,
                    Err(rejection) => return rejection,
                };
                normalized.insert(
                    field.clone(),
                    serde_json::Value::String(raw.trim().to_string()),
                );
            }
            "aliases" => {
                let Some(raw) = value.as_array() else {
                    return Decision::reject(
                        CHARACTER_FIELD_INVALID,
                        "field aliases must be an array of strings",
                    );
                };
                let mut aliases = Vec::with_capacity(raw.len());
                for entry in raw {
                    let Some(alias) = entry.as_str() else {
                        return Decision::reject(
                            CHARACTER_FIELD_INVALID,
                            "field aliases must be an array of strings",
                        );
                    };
                    if let Some(alias) = normalize_id(alias) {
                        aliases.push(serde_json::Value::String(alias));
                    }
                }
                normalized.insert(field.clone(), serde_json::Value::Array(aliases));
            }
            _ => unreachable!("field membership was checked above"),
        }
    }

    // Avatar changes re-resolve through the catalog. A set change without an
    // asset forces re-resolution with an empty asset hint.
    let set_change = normalized.get("avatar_set_id").and_then(|v| v.as_str());
    let asset_change = normalized.get("avatar_asset_id").and_then(|v| v.as_str());
    let resolution = match (set_change, asset_change) {
        (Some(set_id), hint) if !set_id.is_empty() => Some((
            set_id.to_string(),
            hint.unwrap_or_default().to_string(),
        )),
        (Some(_), _) => None, // clearing the set clears the selection as-is
        (None, Some(asset_id)) if !asset_id.is_empty() => {
            if current.avatar_set_id.is_empty() {
                return Decision::reject(
                    INVALID_AVATAR_SET,
                    "avatar_asset_id supplied without an avatar set",
                );
            }
            Some((current.avatar_set_id.clone(), asset_id.to_string()))
        }
        _ => None,
    };
    if let Some((set_id, asset_hint)) = resolution {
        match ctx.catalog.resolve_selection(
            entity_types::CHARACTER,
            &character_id,
            &set_id,
            &asset_hint,
        ) {
            Ok(resolved) => {
                normalized.insert(
                    "avatar_set_id".to_string(),
                    serde_json::Value::String(resolved.set_id),
                );
                normalized.insert(
                    "avatar_asset_id".to_string(),
                    serde_json::Value::String(resolved.asset_id),
                );
            }
            Err(err) => return avatar_rejection(err),
        }
    }

    match EventEnvelope::from_command(command, types::UPDATED, ctx.now())
        .with_entity(entity_types::CHARACTER, &character_id)
        .encode_payload(&CharacterUpdated {
            character_id: character_id.clone(),
            fields: normalized,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_delete(
    characters: &BTreeMap<String, CharacterState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: DeleteCharacter = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(character_id) = normalize_id(&payload.character_id) else {
        return Decision::reject(CHARACTER_ID_REQUIRED, "character_id is required");
    };
    if let Err(rejection) = active(characters, &character_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::DELETED, ctx.now())
        .with_entity(entity_types::CHARACTER, &character_id)
        .encode_payload(&CharacterDeleted {})
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_update_profile(
    characters: &BTreeMap<String, CharacterState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: UpdateProfile = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(character_id) = normalize_id(&payload.character_id) else {
        return Decision::reject(CHARACTER_ID_REQUIRED, "character_id is required");
    };
    if let Err(rejection) = active(characters, &character_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::PROFILE_UPDATED, ctx.now())
        .with_entity(entity_types::CHARACTER, &character_id)
        .encode_payload(&CharacterProfileUpdated {
            profile: payload.profile,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}
