// Copyright 2025 Cowboy AI, LLC.

//! Session subdomain: the active session's gate and spotlight
//!
//! The gate serializes moments where the table waits on one decision (a GM
//! consequence, a party vote). It is either closed or open with an id and a
//! type; resolving it closes it again but keeps the id for continuity. The
//! spotlight names the character currently framed by the narration.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::SessionState;

use crate::registry::{
    decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Open the session gate
    pub const OPEN_GATE: &str = "session.open_gate";
    /// Resolve the open gate
    pub const RESOLVE_GATE: &str = "session.resolve_gate";
    /// Put a character in the spotlight
    pub const SET_SPOTLIGHT: &str = "session.set_spotlight";
    /// Clear the spotlight
    pub const CLEAR_SPOTLIGHT: &str = "session.clear_spotlight";

    /// The gate was opened
    pub const GATE_OPENED: &str = "session.gate_opened";
    /// The gate was resolved
    pub const GATE_RESOLVED: &str = "session.gate_resolved";
    /// The spotlight moved to a character
    pub const SPOTLIGHT_SET: &str = "session.spotlight_set";
    /// The spotlight was cleared
    pub const SPOTLIGHT_CLEARED: &str = "session.spotlight_cleared";
}

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            types::OPEN_GATE,
            Owner::Core,
            decode_as::<payloads::OpenGate>(),
        ),
        CommandDefinition::new(
            types::RESOLVE_GATE,
            Owner::Core,
            decode_as::<payloads::ResolveGate>(),
        ),
        CommandDefinition::new(
            types::SET_SPOTLIGHT,
            Owner::Core,
            decode_as::<payloads::SetSpotlight>(),
        ),
        CommandDefinition::new(
            types::CLEAR_SPOTLIGHT,
            Owner::Core,
            decode_as::<payloads::ClearSpotlight>(),
        ),
    ]
}

/// Event definitions for registry population
pub fn event_definitions() -> Vec<EventDefinition> {
    vec![
        EventDefinition::new(
            types::GATE_OPENED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::GateOpened>(),
        ),
        EventDefinition::new(
            types::GATE_RESOLVED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::GateResolved>(),
        ),
        EventDefinition::new(
            types::SPOTLIGHT_SET,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::SpotlightSet>(),
        ),
        EventDefinition::new(
            types::SPOTLIGHT_CLEARED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::SpotlightCleared>(),
        ),
    ]
}
