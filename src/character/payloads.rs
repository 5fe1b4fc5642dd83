// Copyright 2025 Cowboy AI, LLC.

//! Character command and event payloads

use crate::labels::CharacterKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `character.create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacter {
    /// Character id
    pub character_id: String,
    /// Display name
    pub name: String,
    /// Kind label, `pc`/`npc` in either spelling
    pub kind: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
    /// Controlling participant
    #[serde(default)]
    pub participant_id: String,
    /// Owning participant
    #[serde(default)]
    pub owner_participant_id: String,
    /// Avatar set to resolve
    #[serde(default)]
    pub avatar_set_id: String,
    /// Avatar asset hint within the set
    #[serde(default)]
    pub avatar_asset_id: String,
    /// Pronouns shown at the table
    #[serde(default)]
    pub pronouns: String,
    /// Alternate names
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// `character.update` payload; `fields` is restricted to
/// [`UPDATABLE_FIELDS`](super::UPDATABLE_FIELDS)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCharacter {
    /// Character id
    pub character_id: String,
    /// Field name to new value
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// `character.delete` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCharacter {
    /// Character id
    pub character_id: String,
}

/// `character.update_profile` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// Character id
    pub character_id: String,
    /// Replacement system-specific sheet
    pub profile: serde_json::Value,
}

/// `character.created` payload; empty optional fields are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCreated {
    /// Character id
    pub character_id: String,
    /// Normalized display name
    pub name: String,
    /// Canonical kind
    pub kind: CharacterKind,
    /// Normalized notes
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Controlling participant
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub participant_id: String,
    /// Owning participant
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner_participant_id: String,
    /// Catalog-resolved avatar set
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar_set_id: String,
    /// Catalog-resolved avatar asset
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar_asset_id: String,
    /// Normalized pronouns
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pronouns: String,
    /// Normalized aliases
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// `character.updated` payload; values are already normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterUpdated {
    /// Character id
    pub character_id: String,
    /// Normalized field name to normalized value
    pub fields: BTreeMap<String, serde_json::Value>,
}

/// `character.deleted` payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterDeleted {}

/// `character.profile_updated` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfileUpdated {
    /// Replacement system-specific sheet
    pub profile: serde_json::Value,
}
