// Copyright 2025 Cowboy AI, LLC.

//! Participant seat state

use crate::labels::{CampaignAccess, ControllerKind, ParticipantRole};
use serde::{Deserialize, Serialize};

/// One seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParticipantState {
    /// Whether `participant.joined` has been folded
    pub joined: bool,
    /// Whether `participant.left` has been folded; absorbing
    pub left: bool,
    /// Participant id, copied from the joining event's entity id
    pub participant_id: String,
    /// Bound platform user, empty while unbound
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Table role
    pub role: Option<ParticipantRole>,
    /// Who steers the seat
    pub controller: Option<ControllerKind>,
    /// Campaign access level
    pub access: Option<CampaignAccess>,
}

impl ParticipantState {
    /// A participant is active iff joined and not left
    pub fn is_active(&self) -> bool {
        self.joined && !self.left
    }

    /// True while a user is bound to the seat
    pub fn is_bound(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Access level, defaulting to member for active seats
    pub fn effective_access(&self) -> CampaignAccess {
        self.access.unwrap_or(CampaignAccess::Member)
    }
}
