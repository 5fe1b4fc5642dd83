// Copyright 2025 Cowboy AI, LLC.

//! Campaign subdomain: lifecycle of the campaign record itself
//!
//! A campaign is created once, can be renamed, and can be bound to a game
//! system module. Everything else in the aggregate hangs off this record.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::CampaignState;

use crate::registry::{
    decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Create the campaign
    pub const CREATE: &str = "campaign.create";
    /// Rename the campaign
    pub const RENAME: &str = "campaign.rename";
    /// Bind the campaign to a game system
    pub const BIND_SYSTEM: &str = "campaign.bind_system";

    /// Campaign was created
    pub const CREATED: &str = "campaign.created";
    /// Campaign was renamed
    pub const RENAMED: &str = "campaign.renamed";
    /// Campaign was bound to a game system
    pub const SYSTEM_BOUND: &str = "campaign.system_bound";
}

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            types::CREATE,
            Owner::Core,
            decode_as::<payloads::CreateCampaign>(),
        ),
        CommandDefinition::new(
            types::RENAME,
            Owner::Core,
            decode_as::<payloads::RenameCampaign>(),
        ),
        CommandDefinition::new(
            types::BIND_SYSTEM,
            Owner::Core,
            decode_as::<payloads::BindSystem>(),
        ),
    ]
}

/// Event definitions for registry population
pub fn event_definitions() -> Vec<EventDefinition> {
    vec![
        EventDefinition::new(
            types::CREATED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::CampaignCreated>(),
        ),
        EventDefinition::new(
            types::RENAMED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::CampaignRenamed>(),
        ),
        EventDefinition::new(
            types::SYSTEM_BOUND,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::SystemBound>(),
        ),
    ]
}
