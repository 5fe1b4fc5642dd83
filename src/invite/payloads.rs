// Copyright 2025 Cowboy AI, LLC.

//! Invite command and event payloads

use crate::labels::InviteStatus;
use serde::{Deserialize, Serialize};

/// `invite.create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvite {
    /// Invite id
    pub invite_id: String,
    /// Seat the invite fills
    pub participant_id: String,
    /// Intended recipient; empty leaves the invite open
    #[serde(default)]
    pub recipient_user_id: String,
}

/// `invite.claim` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInvite {
    /// Invite id
    pub invite_id: String,
    /// Seat being claimed
    pub participant_id: String,
    /// Claiming user
    pub user_id: String,
    /// JWT id presented by the claiming user
    pub jwt_id: String,
}

/// `invite.revoke` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeInvite {
    /// Invite id
    pub invite_id: String,
}

/// `invite.update` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInvite {
    /// Invite id
    pub invite_id: String,
    /// New intended recipient
    pub recipient_user_id: String,
}

/// `invite.created` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteCreated {
    /// Invite id
    pub invite_id: String,
    /// Seat the invite fills
    pub participant_id: String,
    /// Intended recipient, empty for open invites
    #[serde(default)]
    pub recipient_user_id: String,
    /// Initial status, always pending
    pub status: InviteStatus,
}

/// `invite.claimed` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteClaimed {
    /// Invite id
    pub invite_id: String,
    /// Seat that was claimed
    pub participant_id: String,
    /// Claiming user
    pub user_id: String,
    /// JWT id presented by the claiming user
    pub jwt_id: String,
}

/// `invite.revoked` payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InviteRevoked {}

/// `invite.updated` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteUpdated {
    /// New intended recipient
    pub recipient_user_id: String,
}
