// Copyright 2025 Cowboy AI, LLC.

//! Character subdomain: PCs and NPCs
//!
//! Characters are created, mutated through a restricted field map, and
//! soft-deleted (deletion is terminal). Avatar selections are resolved
//! against the external asset catalog at decision time, so events always
//! carry catalog-canonical `(set, asset)` pairs. The system-specific sheet
//! lives in an opaque profile blob owned by the bound game system.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::CharacterState;

use crate::registry::{
    decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Create a character
    pub const CREATE: &str = "character.create";
    /// Update character fields
    pub const UPDATE: &str = "character.update";
    /// Delete a character
    pub const DELETE: &str = "character.delete";
    /// Replace the system-specific profile
    pub const UPDATE_PROFILE: &str = "character.update_profile";

    /// A character was created
    pub const CREATED: &str = "character.created";
    /// Character fields were updated
    pub const UPDATED: &str = "character.updated";
    /// A character was deleted
    pub const DELETED: &str = "character.deleted";
    /// The system-specific profile was replaced
    pub const PROFILE_UPDATED: &str = "character.profile_updated";
}

/// Field names accepted by `character.update`
pub const UPDATABLE_FIELDS: &[&str] = &[
    "name",
    "kind",
    "notes",
    "participant_id",
    "owner_participant_id",
    "avatar_set_id",
    "avatar_asset_id",
    "pronouns",
    "aliases",
];

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            types::CREATE,
            Owner::Core,
            decode_as::<payloads::CreateCharacter>(),
        ),
        CommandDefinition::new(
            types::UPDATE,
            Owner::Core,
            decode_as::<payloads::UpdateCharacter>(),
        ),
        CommandDefinition::new(
            types::DELETE,
            Owner::Core,
            decode_as::<payloads::DeleteCharacter>(),
        ),
        CommandDefinition::new(
            types::UPDATE_PROFILE,
            Owner::Core,
            decode_as::<payloads::UpdateProfile>(),
        ),
    ]
}

/// Event definitions for registry population
pub fn event_definitions() -> Vec<EventDefinition> {
    let entity = |event_type: &str, validate| {
        EventDefinition::new(
            event_type,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::EntityTarget,
            validate,
        )
    };
    vec![
        entity(types::CREATED, decode_as::<payloads::CharacterCreated>()),
        entity(types::UPDATED, decode_as::<payloads::CharacterUpdated>()),
        entity(types::DELETED, decode_as::<payloads::CharacterDeleted>()),
        entity(
            types::PROFILE_UPDATED,
            decode_as::<payloads::CharacterProfileUpdated>(),
        ),
    ]
}
