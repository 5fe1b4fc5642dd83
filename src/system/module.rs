// Copyright 2025 Cowboy AI, LLC.

//! The system module contract

use super::state::SystemState;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{CommandEnvelope, EventEnvelope};
use crate::registry::{CommandRegistryBuilder, EventRegistryBuilder, RegistryError};

/// Decides module-owned commands
pub trait SystemDecider: Send + Sync {
    /// Decide a command against the module's state slice; `state` is `None`
    /// until the module's first event for the campaign is folded.
    fn decide(
        &self,
        state: Option<&dyn SystemState>,
        command: &CommandEnvelope,
        ctx: &DecisionContext,
    ) -> Decision;
}

/// Folds module-owned events
pub trait SystemFolder: Send + Sync {
    /// Apply one event, consuming the previous state and returning the next.
    /// `state` is `None` only when the campaign has no state for the module
    /// yet and the module exposes no factory. An error string becomes a
    /// fatal fold error attributed to the module.
    fn apply(
        &self,
        state: Option<Box<dyn SystemState>>,
        event: &EventEnvelope,
    ) -> Result<Box<dyn SystemState>, String>;
}

/// Seeds module state the first time a campaign touches the module
pub trait SystemStateFactory: Send + Sync {
    /// Fresh state for one campaign
    fn new_snapshot_state(&self, campaign_id: &str) -> Box<dyn SystemState>;
}

/// A pluggable game system
///
/// Modules register their command and event types into the shared
/// registries at startup and own everything behind their id prefix.
pub trait SystemModule: Send + Sync {
    /// Module id; also the namespace prefix of its types
    fn id(&self) -> &str;

    /// Module version; campaigns bind to `(id, version)`
    fn version(&self) -> &str;

    /// Register the module's command types
    fn register_commands(&self, builder: &mut CommandRegistryBuilder) -> Result<(), RegistryError>;

    /// Register the module's event types
    fn register_events(&self, builder: &mut EventRegistryBuilder) -> Result<(), RegistryError>;

    /// Event types the module's decider may emit
    fn emittable_event_types(&self) -> Vec<String>;

    /// The module's decider
    fn decider(&self) -> &dyn SystemDecider;

    /// The module's folder
    fn folder(&self) -> &dyn SystemFolder;

    /// Optional state seeder; `None` means the folder must tolerate a
    /// missing state on first apply.
    fn state_factory(&self) -> Option<&dyn SystemStateFactory> {
        None
    }
}
