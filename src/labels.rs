// Copyright 2025 Cowboy AI, LLC.

//! Canonicalization of enum-like labels
//!
//! Role, kind, status, controller, and access labels cross the wire in two
//! spellings: canonical lowercase (`"pc"`) and protobuf-style uppercase
//! (`"CHARACTER_KIND_PC"`). Both parse; events always carry the canonical
//! lowercase form. Parsing is case-insensitive after the protobuf prefix is
//! stripped, so `"PC"` and `"Pc"` are also accepted.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A label value that did not match any known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {label} label: {value}")]
pub struct LabelParseError {
    /// Which label family was being parsed
    pub label: &'static str,
    /// The raw value that failed to parse
    pub value: String,
}

/// Strip an optional protobuf-style prefix and lowercase the remainder.
fn canonical_form(raw: &str, proto_prefix: &str) -> String {
    let trimmed = raw.trim();
    // The prefix is ASCII, so uppercasing preserves byte offsets.
    let stripped = if trimmed.to_ascii_uppercase().starts_with(proto_prefix) {
        &trimmed[proto_prefix.len()..]
    } else {
        trimmed
    };
    stripped.to_ascii_lowercase()
}

macro_rules! impl_label {
    ($ty:ident, $family:literal, $proto:literal, { $($variant:ident => $canon:literal),+ $(,)? }) => {
        impl $ty {
            /// Canonical lowercase form carried in events
            pub fn canonical(&self) -> &'static str {
                match self {
                    $($ty::$variant => $canon,)+
                }
            }

            /// Parse a canonical or protobuf-style label
            pub fn parse_label(raw: &str) -> Result<Self, LabelParseError> {
                match canonical_form(raw, $proto).as_str() {
                    $($canon => Ok($ty::$variant),)+
                    _ => Err(LabelParseError {
                        label: $family,
                        value: raw.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.canonical())
            }
        }

        impl FromStr for $ty {
            type Err = LabelParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_label(s)
            }
        }
    };
}

/// Who issued a command or caused an event
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    /// A participant seated in the campaign
    #[default]
    Participant,
    /// The platform itself (automation, modules, migrations)
    System,
}

impl_label!(ActorType, "actor type", "ACTOR_TYPE_", {
    Participant => "participant",
    System => "system",
});

/// Table role of a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    /// Game master seat
    Gm,
    /// Player seat
    Player,
}

impl_label!(ParticipantRole, "participant role", "PARTICIPANT_ROLE_", {
    Gm => "gm",
    Player => "player",
});

/// Campaign access level of a participant
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CampaignAccess {
    /// Plays in the campaign, manages own resources only
    Member,
    /// Manages campaign resources, cannot touch owners
    Manager,
    /// Full control, including access changes
    Owner,
}

impl_label!(CampaignAccess, "campaign access", "CAMPAIGN_ACCESS_", {
    Member => "member",
    Manager => "manager",
    Owner => "owner",
});

/// Who steers a seat or a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// Controlled by a human at the table
    Human,
    /// Controlled by the platform's automation
    Ai,
}

impl_label!(ControllerKind, "controller", "CONTROLLER_KIND_", {
    Human => "human",
    Ai => "ai",
});

/// Kind of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    /// Player character
    Pc,
    /// Non-player character
    Npc,
}

impl_label!(CharacterKind, "character kind", "CHARACTER_KIND_", {
    Pc => "pc",
    Npc => "npc",
});

/// Lifecycle status of an invite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Created and waiting for a recipient
    Pending,
    /// Claimed by a user; terminal
    Claimed,
    /// Withdrawn by the campaign; terminal
    Revoked,
}

impl_label!(InviteStatus, "invite status", "INVITE_STATUS_", {
    Pending => "pending",
    Claimed => "claimed",
    Revoked => "revoked",
});

impl InviteStatus {
    /// Terminal statuses absorb all further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, InviteStatus::Claimed | InviteStatus::Revoked)
    }
}
