// Copyright 2025 Cowboy AI, LLC.

//! Campaign command and event payloads

use serde::{Deserialize, Serialize};

/// `campaign.create` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCampaign {
    /// Display name
    pub name: String,
    /// GM mode label; defaults to `human`
    #[serde(default)]
    pub gm_mode: String,
    /// Optional game system to bind at creation
    #[serde(default)]
    pub system_id: String,
    /// Version of the optional game system
    #[serde(default)]
    pub system_version: String,
}

/// `campaign.rename` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameCampaign {
    /// New display name
    pub name: String,
}

/// `campaign.bind_system` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindSystem {
    /// Game system id
    pub system_id: String,
    /// Game system version
    pub system_version: String,
}

/// `campaign.created` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCreated {
    /// Normalized display name
    pub name: String,
    /// Canonical GM mode label
    pub gm_mode: String,
    /// Initial status
    pub status: String,
}

/// `campaign.renamed` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRenamed {
    /// Normalized display name
    pub name: String,
}

/// `campaign.system_bound` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemBound {
    /// Game system id
    pub system_id: String,
    /// Game system version
    pub system_version: String,
}
