// Copyright 2025 Cowboy AI, LLC.

//! Participant subdomain: seats at the table
//!
//! A participant joins once, may be updated while seated, and leaves for
//! good (leaving is absorbing). Independently of the seat lifecycle, a seat
//! can be bound to a platform user, unbound, or reassigned to a different
//! user in one step.
//!
//! `seat.reassigned` is a legacy spelling of `participant.seat_reassigned`;
//! both fold identically.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::ParticipantState;

use crate::registry::{
    decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Join the campaign
    pub const JOIN: &str = "participant.join";
    /// Update seat details
    pub const UPDATE: &str = "participant.update";
    /// Leave the campaign
    pub const LEAVE: &str = "participant.leave";
    /// Bind the seat to a user
    pub const BIND: &str = "participant.bind";
    /// Unbind the seat from its user
    pub const UNBIND: &str = "participant.unbind";
    /// Reassign the seat to a different user
    pub const REASSIGN_SEAT: &str = "participant.reassign_seat";

    /// A participant joined
    pub const JOINED: &str = "participant.joined";
    /// A participant was updated
    pub const UPDATED: &str = "participant.updated";
    /// A participant left
    pub const LEFT: &str = "participant.left";
    /// A user was bound to the seat
    pub const USER_BOUND: &str = "participant.user_bound";
    /// The seat's user binding was removed
    pub const USER_UNBOUND: &str = "participant.user_unbound";
    /// The seat moved to a different user
    pub const SEAT_REASSIGNED: &str = "participant.seat_reassigned";
    /// Legacy spelling of [`SEAT_REASSIGNED`]
    pub const SEAT_REASSIGNED_LEGACY: &str = "seat.reassigned";
}

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(types::JOIN, Owner::Core, decode_as::<payloads::JoinParticipant>()),
        CommandDefinition::new(
            types::UPDATE,
            Owner::Core,
            decode_as::<payloads::UpdateParticipant>(),
        ),
        CommandDefinition::new(
            types::LEAVE,
            Owner::Core,
            decode_as::<payloads::LeaveParticipant>(),
        ),
        CommandDefinition::new(types::BIND, Owner::Core, decode_as::<payloads::BindUser>()),
        CommandDefinition::new(types::UNBIND, Owner::Core, decode_as::<payloads::UnbindUser>()),
        CommandDefinition::new(
            types::REASSIGN_SEAT,
            Owner::Core,
            decode_as::<payloads::ReassignSeat>(),
        ),
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
        entity(types::JOINED, decode_as::<payloads::ParticipantJoined>()),
        entity(types::UPDATED, decode_as::<payloads::ParticipantUpdated>()),
        entity(types::LEFT, decode_as::<payloads::ParticipantLeft>()),
        entity(types::USER_BOUND, decode_as::<payloads::UserBound>()),
        entity(types::USER_UNBOUND, decode_as::<payloads::UserUnbound>()),
        entity(types::SEAT_REASSIGNED, decode_as::<payloads::SeatReassigned>()),
        entity(
            types::SEAT_REASSIGNED_LEGACY,
            decode_as::<payloads::SeatReassigned>(),
        ),
    ]
}
