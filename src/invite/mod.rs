// Copyright 2025 Cowboy AI, LLC.

//! Invite subdomain: bringing users into seats
//!
//! An invite is created pending for one participant seat, then either
//! claimed by a user or revoked by the campaign. Claimed and revoked are
//! absorbing; nothing moves an invite out of them.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::InviteState;

use crate::registry::{
    decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Create a pending invite
    pub const CREATE: &str = "invite.create";
    /// Claim a pending invite
    pub const CLAIM: &str = "invite.claim";
    /// Revoke a pending invite
    pub const REVOKE: &str = "invite.revoke";
    /// Update a pending invite's recipient
    pub const UPDATE: &str = "invite.update";

    /// An invite was created
    pub const CREATED: &str = "invite.created";
    /// An invite was claimed
    pub const CLAIMED: &str = "invite.claimed";
    /// An invite was revoked
    pub const REVOKED: &str = "invite.revoked";
    /// An invite was updated
    pub const UPDATED: &str = "invite.updated";
}

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(types::CREATE, Owner::Core, decode_as::<payloads::CreateInvite>()),
        CommandDefinition::new(types::CLAIM, Owner::Core, decode_as::<payloads::ClaimInvite>()),
        CommandDefinition::new(types::REVOKE, Owner::Core, decode_as::<payloads::RevokeInvite>()),
        CommandDefinition::new(types::UPDATE, Owner::Core, decode_as::<payloads::UpdateInvite>()),
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
        entity(types::CREATED, decode_as::<payloads::InviteCreated>()),
        entity(types::CLAIMED, decode_as::<payloads::InviteClaimed>()),
        entity(types::REVOKED, decode_as::<payloads::InviteRevoked>()),
        entity(types::UPDATED, decode_as::<payloads::InviteUpdated>()),
    ]
}
