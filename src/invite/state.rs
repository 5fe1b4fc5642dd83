// Copyright 2025 Cowboy AI, LLC.

//! Invite state

use crate::labels::InviteStatus;
use serde::{Deserialize, Serialize};

/// One invite into a participant seat
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InviteState {
    /// Whether `invite.created` has been folded
    pub created: bool,
    /// Invite id, copied from the creating event's entity id
    pub invite_id: String,
    /// Seat the invite fills
    pub participant_id: String,
    /// Intended recipient, empty for open invites
    pub recipient_user_id: String,
    /// Lifecycle status; `None` before creation
    pub status: Option<InviteStatus>,
    /// User that claimed the invite
    pub claimed_user_id: String,
    /// JWT id presented at claim time
    pub claimed_jwt_id: String,
}

impl InviteState {
    /// True while the invite can still be claimed or revoked
    pub fn is_pending(&self) -> bool {
        self.status == Some(InviteStatus::Pending)
    }
}
