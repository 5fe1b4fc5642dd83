// Copyright 2025 Cowboy AI, LLC.

//! The aggregate folder
//!
//! Dispatch is driven by a declarative fold table: one row per subdomain,
//! pairing its `handled_types()` with a handler over the whole aggregate.
//! Adding a subdomain means adding a row. The type index derived from the
//! table is built once, lazily, and shared by every campaign.
//!
//! Entity-keyed rows (participant, character, invite) wrap their subdomain
//! fold with the map plumbing: trim the envelope's entity id, refuse an
//! empty one, lazily initialize the entry, and write the result back.

use super::state::AggregateState;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;
use crate::registry::EventRegistry;
use crate::system::{SystemKey, SystemModuleRegistry};
use crate::{action, campaign, character, invite, participant, session};
use std::collections::HashMap;
use std::sync::OnceLock;

type Handler = fn(&mut AggregateState, &EventEnvelope) -> Result<(), FoldError>;

struct FoldTableEntry {
    types: fn() -> &'static [&'static str],
    handler: Handler,
}

fn fold_campaign(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    campaign::fold(&mut state.campaign, event)
}

fn fold_session(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    session::fold(&mut state.session, event)
}

fn fold_action(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    action::fold(&mut state.action, event)
}

fn fold_participant(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    let entity_id = required_entity_id(event)?;
    let entry = state.participants.entry(entity_id).or_default();
    participant::fold(entry, event)
}

fn fold_character(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    let entity_id = required_entity_id(event)?;
    let entry = state.characters.entry(entity_id).or_default();
    character::fold(entry, event)
}

fn fold_invite(state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
    let entity_id = required_entity_id(event)?;
    let entry = state.invites.entry(entity_id).or_default();
    invite::fold(entry, event)
}

fn required_entity_id(event: &EventEnvelope) -> Result<String, FoldError> {
    let entity_id = event.entity_id.trim();
    if entity_id.is_empty() {
        return Err(FoldError::EntityIdRequired {
            event_type: event.event_type.clone(),
        });
    }
    Ok(entity_id.to_string())
}

/// One row per subdomain; adding a subdomain is adding a row here.
const FOLD_TABLE: &[FoldTableEntry] = &[
    FoldTableEntry {
        types: campaign::handled_types,
        handler: fold_campaign,
    },
    FoldTableEntry {
        types: session::handled_types,
        handler: fold_session,
    },
    FoldTableEntry {
        types: action::handled_types,
        handler: fold_action,
    },
    FoldTableEntry {
        types: participant::handled_types,
        handler: fold_participant,
    },
    FoldTableEntry {
        types: character::handled_types,
        handler: fold_character,
    },
    FoldTableEntry {
        types: invite::handled_types,
        handler: fold_invite,
    },
];

fn dispatch_index() -> &'static HashMap<&'static str, Handler> {
    static INDEX: OnceLock<HashMap<&'static str, Handler>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = HashMap::new();
        for entry in FOLD_TABLE {
            for event_type in (entry.types)() {
                index.insert(*event_type, entry.handler);
            }
        }
        index
    })
}

/// Every event type the fold table dispatches
///
/// Startup validation uses this to confirm that each registered non-audit
/// core event type is actually reachable by a fold.
pub fn fold_dispatched_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = dispatch_index().keys().copied().collect();
    types.sort_unstable();
    types
}

/// Applies events to aggregate state, at command time and during replay
pub struct AggregateFolder<'a> {
    events: &'a EventRegistry,
    modules: &'a SystemModuleRegistry,
}

impl<'a> AggregateFolder<'a> {
    /// Build a folder over the frozen registries
    pub fn new(events: &'a EventRegistry, modules: &'a SystemModuleRegistry) -> Self {
        Self { events, modules }
    }

    /// Fold one event into the state.
    ///
    /// Audit-only events return the state untouched. Events carrying system
    /// routing go through their module's folder after any core handler. A
    /// fold error leaves the caller obliged to abort the batch.
    pub fn fold(&self, state: &mut AggregateState, event: &EventEnvelope) -> Result<(), FoldError> {
        if self.events.is_audit_only(&event.event_type) {
            return Ok(());
        }
        if event.has_partial_system_routing() {
            return Err(FoldError::IncompleteSystemRouting {
                event_type: event.event_type.clone(),
            });
        }

        let handler = dispatch_index().get(event.event_type.as_str());
        if let Some(handler) = handler {
            handler(state, event)?;
        }

        if event.has_system_routing() {
            let key = SystemKey::new(
                event.system_id.as_deref().unwrap_or_default(),
                event.system_version.as_deref().unwrap_or_default(),
            );
            let previous = state.systems.take(&key);
            let next = self.modules.route_event(previous, event)?;
            state.systems.insert(key, next);
        } else if handler.is_none() {
            return Err(FoldError::UnhandledEventType {
                event_type: event.event_type.clone(),
            });
        }

        Ok(())
    }

    /// Fold a batch in order, stopping at the first error.
    ///
    /// Returns how many events were applied. On error the state reflects
    /// every event before the failing one; the caller must not advance its
    /// stream cursor past that point.
    pub fn fold_all<'e>(
        &self,
        state: &mut AggregateState,
        events: impl IntoIterator<Item = &'e EventEnvelope>,
    ) -> Result<usize, FoldError> {
        let mut applied = 0;
        for event in events {
            self.fold(state, event)?;
            applied += 1;
        }
        Ok(applied)
    }
}
