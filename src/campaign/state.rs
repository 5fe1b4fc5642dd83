// Copyright 2025 Cowboy AI, LLC.

//! Campaign lifecycle state

use serde::{Deserialize, Serialize};

/// Lifecycle facts of one campaign
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CampaignState {
    /// Whether `campaign.created` has been folded
    pub created: bool,
    /// Campaign id, copied from the creating event's envelope
    pub campaign_id: String,
    /// Display name
    pub name: String,
    /// GM mode label, canonical lowercase
    pub gm_mode: String,
    /// Lifecycle status, `active` once created
    pub status: String,
    /// Bound game system id, empty when unbound
    pub system_id: String,
    /// Bound game system version, empty when unbound
    pub system_version: String,
}

impl CampaignState {
    /// True once the campaign exists
    pub fn is_created(&self) -> bool {
        self.created
    }

    /// True when a game system is bound
    pub fn has_system(&self) -> bool {
        !self.system_id.is_empty() && !self.system_version.is_empty()
    }
}
