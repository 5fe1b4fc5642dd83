// Copyright 2025 Cowboy AI, LLC.

//! Typed event definitions and the event registry
//!
//! An event definition carries two properties beyond the payload check:
//! its intent (fold-visible or audit-only) and its addressing (campaign or
//! entity target). Entity-target events are refused at append time when the
//! envelope does not name an entity.

use super::{EventAddressing, EventIntent, Owner, PayloadValidator, RegistryError};
use crate::envelope::EventEnvelope;
use indexmap::IndexMap;

/// Definition of one event type
#[derive(Clone)]
pub struct EventDefinition {
    /// The event type string, e.g. `character.created`
    pub event_type: String,
    /// Who owns the type
    pub owner: Owner,
    /// Fold-visible or audit-only
    pub intent: EventIntent,
    /// Campaign-target or entity-target
    pub addressing: EventAddressing,
    validate: PayloadValidator,
}

impl EventDefinition {
    /// Define an event type with its payload validator
    pub fn new(
        event_type: impl Into<String>,
        owner: Owner,
        intent: EventIntent,
        addressing: EventAddressing,
        validate: PayloadValidator,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            owner,
            intent,
            addressing,
            validate,
        }
    }

    /// Run the payload shape check
    pub fn validate_payload(&self, bytes: &[u8]) -> Result<(), String> {
        (self.validate)(bytes)
    }

    /// True when the event never mutates aggregate state
    pub fn is_audit_only(&self) -> bool {
        self.intent == EventIntent::AuditOnly
    }
}

impl std::fmt::Debug for EventDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDefinition")
            .field("event_type", &self.event_type)
            .field("owner", &self.owner)
            .field("intent", &self.intent)
            .field("addressing", &self.addressing)
            .finish_non_exhaustive()
    }
}

/// Builder that populates an event registry at startup
#[derive(Debug, Default)]
pub struct EventRegistryBuilder {
    definitions: IndexMap<String, EventDefinition>,
}

impl EventRegistryBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition; a duplicate type is an error
    pub fn register(&mut self, definition: EventDefinition) -> Result<(), RegistryError> {
        if self.definitions.contains_key(&definition.event_type) {
            return Err(RegistryError::DuplicateType(definition.event_type));
        }
        self.definitions
            .insert(definition.event_type.clone(), definition);
        Ok(())
    }

    /// Register many definitions in order
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = EventDefinition>,
    ) -> Result<(), RegistryError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> EventRegistry {
        EventRegistry {
            definitions: self.definitions,
        }
    }
}

/// Immutable registry of event types
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    definitions: IndexMap<String, EventDefinition>,
}

impl EventRegistry {
    /// Look up a definition by type
    pub fn definition(&self, event_type: &str) -> Option<&EventDefinition> {
        self.definitions.get(event_type)
    }

    /// True when the type is registered
    pub fn contains(&self, event_type: &str) -> bool {
        self.definitions.contains_key(event_type)
    }

    /// All registered types, in registration order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// All definitions, in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &EventDefinition> {
        self.definitions.values()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no types are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// True when the type is registered as audit-only
    pub fn is_audit_only(&self, event_type: &str) -> bool {
        self.definition(event_type)
            .map(EventDefinition::is_audit_only)
            .unwrap_or(false)
    }

    /// Check an event before it is appended: the type must be known, the
    /// payload must validate, entity-target events must name an entity, and
    /// the system routing pair must be complete or absent.
    pub fn validate_for_append(&self, event: &EventEnvelope) -> Result<(), RegistryError> {
        let definition = self
            .definition(&event.event_type)
            .ok_or_else(|| RegistryError::TypeUnknown(event.event_type.clone()))?;

        if definition.addressing == EventAddressing::EntityTarget {
            if event.entity_type.trim().is_empty() {
                return Err(RegistryError::EntityTypeRequired(event.event_type.clone()));
            }
            if event.entity_id.trim().is_empty() {
                return Err(RegistryError::EntityIdRequired(event.event_type.clone()));
            }
        }

        if event.has_partial_system_routing() {
            return Err(RegistryError::SystemPairIncomplete(event.event_type.clone()));
        }

        definition
            .validate_payload(event.payload_json.as_bytes())
            .map_err(|message| RegistryError::PayloadInvalid {
                type_name: event.event_type.clone(),
                message,
            })
    }
}
