// Copyright 2025 Cowboy AI, LLC.

//! Composite aggregate state

use crate::action::ActionState;
use crate::campaign::CampaignState;
use crate::character::CharacterState;
use crate::invite::InviteState;
use crate::labels::{CampaignAccess, ParticipantRole};
use crate::participant::ParticipantState;
use crate::session::SessionState;
use crate::system::{SystemKey, SystemState};
use std::collections::BTreeMap;

/// Per-module opaque state, keyed by `(id, version)`
///
/// Entries are owned by their module; the core only moves them in and out
/// of the module's folder.
#[derive(Debug, Clone, Default)]
pub struct SystemStates(BTreeMap<SystemKey, Box<dyn SystemState>>);

impl SystemStates {
    /// State for one module, if the campaign has touched it
    pub fn get(&self, key: &SystemKey) -> Option<&dyn SystemState> {
        self.0.get(key).map(Box::as_ref)
    }

    /// Remove a module's state, transferring ownership to the caller
    pub fn take(&mut self, key: &SystemKey) -> Option<Box<dyn SystemState>> {
        self.0.remove(key)
    }

    /// Replace a module's state
    pub fn insert(&mut self, key: SystemKey, state: Box<dyn SystemState>) {
        self.0.insert(key, state);
    }

    /// Keys of modules with state, sorted
    pub fn keys(&self) -> impl Iterator<Item = &SystemKey> {
        self.0.keys()
    }

    /// Number of modules with state
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no module has state yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SystemStates {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .all(|(key, state)| other.0.get(key).is_some_and(|o| state.eq_box(o.as_ref())))
    }
}

/// The in-memory projection of one campaign
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregateState {
    /// Campaign lifecycle facts
    pub campaign: CampaignState,
    /// Active-session context
    pub session: SessionState,
    /// Causal replay maps
    pub action: ActionState,
    /// Seats, keyed by participant id
    pub participants: BTreeMap<String, ParticipantState>,
    /// Characters, keyed by character id
    pub characters: BTreeMap<String, CharacterState>,
    /// Invites, keyed by invite id
    pub invites: BTreeMap<String, InviteState>,
    /// Per-module opaque state
    pub systems: SystemStates,
}

impl AggregateState {
    /// Fresh state for a campaign with no events
    pub fn new() -> Self {
        Self::default()
    }

    /// Active participants in sorted key order
    pub fn active_participants(&self) -> impl Iterator<Item = &ParticipantState> {
        self.participants.values().filter(|p| p.is_active())
    }

    /// Active characters in sorted key order
    pub fn active_characters(&self) -> impl Iterator<Item = &CharacterState> {
        self.characters.values().filter(|c| c.is_active())
    }

    /// Number of active participants holding owner access
    pub fn owner_count(&self) -> usize {
        self.active_participants()
            .filter(|p| p.effective_access() == CampaignAccess::Owner)
            .count()
    }

    /// True when at least one active participant holds the GM seat
    pub fn has_active_gm(&self) -> bool {
        self.active_participants()
            .any(|p| p.role == Some(ParticipantRole::Gm))
    }
}
