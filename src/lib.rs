// Copyright (c) 2025 - Cowboy AI, LLC.

//! # Campaign Domain
//!
//! Event-sourced domain core for tabletop-RPG campaigns. Commands are
//! validated against replayed aggregate state and either rejected or turned
//! into immutable events; events are folded back into state by the same
//! fold at command time and during historical replay. That determinism is
//! the crate's central property.
//!
//! The building blocks:
//! - **Envelopes**: command/event headers with correlation and causation
//! - **Registries**: frozen maps from type strings to payload-validated definitions
//! - **Deciders**: pure `(state, command, clock) -> events | rejections` per subdomain
//! - **Folds**: pure `(state, event) -> state` per subdomain, dispatched by a declarative table
//! - **Aggregate**: the composite campaign state and its folder
//! - **System modules**: pluggable game systems with their own types and opaque state
//! - **Authorization**: policy table plus resource-ownership decisions
//! - **Readiness**: derived invariants gating session start
//! - **Snapshots**: continuity projections (GM Fear) over the journal
//!
//! ## Design Principles
//!
//! 1. **Determinism**: replaying a journal yields the exact state the
//!    commands produced; folds never consult clocks or I/O
//! 2. **Purity at the core**: deciders and folds are reentrant functions;
//!    I/O lives only at the journal and catalog boundaries
//! 3. **Single writer per campaign**: the only synchronization the core
//!    needs; campaigns scale horizontally
//! 4. **Frozen registries**: built once at startup, read-only after
//! 5. **Stable codes**: rejection and reason codes are external contract

#![warn(missing_docs)]

pub mod action;
pub mod aggregate;
pub mod authorization;
pub mod campaign;
pub mod catalog;
pub mod character;
mod clock;
mod context;
mod decision;
mod envelope;
mod errors;
pub mod identifiers;
pub mod invite;
pub mod journal;
pub mod labels;
pub mod participant;
mod payload;
pub mod pipeline;
pub mod readiness;
pub mod registry;
pub mod replay;
pub mod session;
pub mod snapshot;
pub mod system;

// Re-export core types
pub use aggregate::{fold_dispatched_types, AggregateFolder, AggregateState, SystemStates};
pub use authorization::{
    can_character_mutation, can_participant_access_change, can_participant_removal, check_batch,
    AuthzAction, AuthzDecision, AuthzResource, BatchCheck, BatchDecision, Capability, PolicyTable,
};
pub use catalog::{AssetCatalog, AssetCatalogError, AvatarSelection, PassthroughAssetCatalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use context::DecisionContext;
pub use decision::{Decision, Rejection};
pub use envelope::{entity_types, CommandEnvelope, EventEnvelope};
pub use errors::FoldError;
pub use identifiers::{normalize_id, normalize_optional_id, EventId};
pub use journal::{InMemoryJournal, Journal, JournalError};
pub use labels::{
    ActorType, CampaignAccess, CharacterKind, ControllerKind, InviteStatus, LabelParseError,
    ParticipantRole,
};
pub use payload::PayloadJson;
pub use pipeline::{route_command, CampaignEngine, CommandOutcome, PipelineError};
pub use readiness::{evaluate_session_start, SystemReadinessHook};
pub use registry::validation::{validate_registries, ValidationError};
pub use registry::{
    CommandDefinition, CommandRegistry, CommandRegistryBuilder, EventAddressing, EventDefinition,
    EventIntent, EventRegistry, EventRegistryBuilder, Owner, PayloadValidator, RegistryError,
};
pub use replay::{replay_campaign, replay_events, ReplayError, ReplayStats};
pub use snapshot::{
    apply_gm_fear_gain, apply_gm_fear_spend, GmFear, GmFearChange, GmFearError, Projection,
    SnapshotPolicy, GM_FEAR_MAX,
};
pub use system::{
    downcast_state, SystemDecider, SystemFolder, SystemKey, SystemModule, SystemModuleRegistry,
    SystemState, SystemStateFactory,
};

// Validator helpers, re-exported for modules defining their own payloads
pub use registry::{any_json, decode_as};

/// Register every core subdomain's command definitions
pub fn register_core_commands(builder: &mut CommandRegistryBuilder) -> Result<(), RegistryError> {
    builder.register_all(campaign::command_definitions())?;
    builder.register_all(session::command_definitions())?;
    builder.register_all(action::command_definitions())?;
    builder.register_all(participant::command_definitions())?;
    builder.register_all(character::command_definitions())?;
    builder.register_all(invite::command_definitions())?;
    Ok(())
}

/// Register every core subdomain's event definitions
pub fn register_core_events(builder: &mut EventRegistryBuilder) -> Result<(), RegistryError> {
    builder.register_all(campaign::event_definitions())?;
    builder.register_all(session::event_definitions())?;
    builder.register_all(action::event_definitions())?;
    builder.register_all(participant::event_definitions())?;
    builder.register_all(character::event_definitions())?;
    builder.register_all(invite::event_definitions())?;
    Ok(())
}

/// Build the frozen core registries in one call
pub fn core_registries() -> Result<(CommandRegistry, EventRegistry), RegistryError> {
    let mut commands = CommandRegistryBuilder::new();
    register_core_commands(&mut commands)?;
    let mut events = EventRegistryBuilder::new();
    register_core_events(&mut events)?;
    Ok((commands.build(), events.build()))
}
