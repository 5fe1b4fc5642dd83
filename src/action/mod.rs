// Copyright 2025 Cowboy AI, LLC.

//! Action subdomain: causal replay maps for rolls and outcomes
//!
//! Resolved rolls and applied outcomes are append-only, keyed by a
//! per-campaign sequence. They let the rest of the system re-derive cause
//! and effect for any moment at the table. Raw dice telemetry is recorded
//! as an audit-only event that never touches state.

pub mod decider;
pub mod fold;
pub mod payloads;
pub mod state;

pub use decider::decide;
pub use fold::{fold, handled_types};
pub use state::{ActionState, AppliedOutcome, RollRecord};

use crate::registry::{
    any_json, decode_as, CommandDefinition, EventAddressing, EventDefinition, EventIntent, Owner,
};

/// Command and event type strings owned by this subdomain
pub mod types {
    /// Record a resolved roll
    pub const RESOLVE_ROLL: &str = "action.resolve_roll";
    /// Apply an outcome derived from a roll
    pub const APPLY_OUTCOME: &str = "action.apply_outcome";

    /// A roll was resolved
    pub const ROLL_RESOLVED: &str = "action.roll_resolved";
    /// An outcome was applied
    pub const OUTCOME_APPLIED: &str = "action.outcome_applied";
    /// Raw roll telemetry, audit trail only
    pub const ROLL_AUDITED: &str = "action.roll_audited";
}

/// Command definitions for registry population
pub fn command_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            types::RESOLVE_ROLL,
            Owner::Core,
            decode_as::<payloads::ResolveRoll>(),
        ),
        CommandDefinition::new(
            types::APPLY_OUTCOME,
            Owner::Core,
            decode_as::<payloads::ApplyOutcome>(),
        ),
    ]
}

/// Event definitions for registry population
pub fn event_definitions() -> Vec<EventDefinition> {
    vec![
        EventDefinition::new(
            types::ROLL_RESOLVED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::RollResolved>(),
        ),
        EventDefinition::new(
            types::OUTCOME_APPLIED,
            Owner::Core,
            EventIntent::ProjectionAndReplay,
            EventAddressing::CampaignTarget,
            decode_as::<payloads::OutcomeApplied>(),
        ),
        EventDefinition::new(
            types::ROLL_AUDITED,
            Owner::Core,
            EventIntent::AuditOnly,
            EventAddressing::CampaignTarget,
            any_json(),
        ),
    ]
}
