// Copyright 2025 Cowboy AI, LLC.

//! Participant command and event payloads
//!
//! Command payloads carry labels as raw strings (either spelling); event
//! payloads carry the typed, canonical form.

use crate::labels::{CampaignAccess, ControllerKind, ParticipantRole};
use serde::{Deserialize, Serialize};

/// `participant.join` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinParticipant {
    /// Participant id
    pub participant_id: String,
    /// Display name
    pub name: String,
    /// Table role label
    pub role: String,
    /// Access level label; defaults to `member`
    #[serde(default)]
    pub access: String,
    /// Controller label; defaults to `human`
    #[serde(default)]
    pub controller: String,
}

/// `participant.update` payload; absent fields are left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParticipant {
    /// Participant id
    pub participant_id: String,
    /// New display name
    #[serde(default)]
    pub name: Option<String>,
    /// New table role label
    #[serde(default)]
    pub role: Option<String>,
    /// New controller label
    #[serde(default)]
    pub controller: Option<String>,
}

/// `participant.leave` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveParticipant {
    /// Participant id
    pub participant_id: String,
}

/// `participant.bind` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindUser {
    /// Participant id
    pub participant_id: String,
    /// User to bind
    pub user_id: String,
}

/// `participant.unbind` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnbindUser {
    /// Participant id
    pub participant_id: String,
    /// When supplied, must match the currently bound user
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `participant.reassign_seat` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassignSeat {
    /// Participant id
    pub participant_id: String,
    /// User taking over the seat
    pub user_id: String,
    /// When supplied, must match the currently bound user
    #[serde(default)]
    pub prior_user_id: Option<String>,
}

/// `participant.joined` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantJoined {
    /// Participant id
    pub participant_id: String,
    /// Normalized display name
    pub name: String,
    /// Canonical table role
    pub role: ParticipantRole,
    /// Canonical access level
    pub access: CampaignAccess,
    /// Canonical controller
    pub controller: ControllerKind,
}

/// `participant.updated` payload; absent fields were unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantUpdated {
    /// Normalized display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Canonical table role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ParticipantRole>,
    /// Canonical controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<ControllerKind>,
}

/// `participant.left` payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantLeft {}

/// `participant.user_bound` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBound {
    /// The bound user
    pub user_id: String,
}

/// `participant.user_unbound` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUnbound {
    /// The user that was unbound
    pub user_id: String,
}

/// `participant.seat_reassigned` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatReassigned {
    /// User now holding the seat
    pub user_id: String,
    /// User previously holding the seat, empty when the seat was unbound
    #[serde(default)]
    pub prior_user_id: String,
}
