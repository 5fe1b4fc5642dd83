// Copyright 2025 Cowboy AI, LLC.

//! Character state

use crate::labels::CharacterKind;
use serde::{Deserialize, Serialize};

/// One character in the campaign
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterState {
    /// Whether `character.created` has been folded
    pub created: bool,
    /// Whether `character.deleted` has been folded; terminal
    pub deleted: bool,
    /// Character id, copied from the creating event's entity id
    pub character_id: String,
    /// Display name
    pub name: String,
    /// PC or NPC
    pub kind: Option<CharacterKind>,
    /// Free-form notes
    pub notes: String,
    /// Controlling participant, empty when uncontrolled
    pub participant_id: String,
    /// Owning participant, empty when unowned
    pub owner_participant_id: String,
    /// Resolved avatar set
    pub avatar_set_id: String,
    /// Resolved avatar asset
    pub avatar_asset_id: String,
    /// Pronouns shown at the table
    pub pronouns: String,
    /// Alternate names
    pub aliases: Vec<String>,
    /// Opaque system-specific sheet, owned by the bound game system
    pub system_profile: serde_json::Value,
}

impl CharacterState {
    /// A character is active iff created and not deleted
    pub fn is_active(&self) -> bool {
        self.created && !self.deleted
    }

    /// True when a participant controls the character
    pub fn has_controller(&self) -> bool {
        !self.participant_id.is_empty()
    }
}
