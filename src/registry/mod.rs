// Copyright 2025 Cowboy AI, LLC.

//! Command and event registries
//!
//! A registry maps a type string to its definition: who owns it, how its
//! payload validates, and (for events) how it is addressed and whether it
//! feeds folds at all. Registries are assembled once at startup through a
//! builder and frozen; afterwards they are plain read-only lookups safe to
//! share across campaigns.

mod commands;
mod events;
pub mod validation;

pub use commands::{CommandDefinition, CommandRegistry, CommandRegistryBuilder};
pub use events::{EventDefinition, EventRegistry, EventRegistryBuilder};

use std::sync::Arc;
use thiserror::Error;

/// Who owns a command or event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    /// Defined by the campaign core
    Core,
    /// Defined by a game-system module
    System,
}

/// Whether an event feeds folds or exists for the audit trail only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventIntent {
    /// Folded into aggregate state at command time and during replay
    ProjectionAndReplay,
    /// Appended and visible to observers, never folded
    AuditOnly,
}

/// How an event is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAddressing {
    /// Addresses the campaign as a whole
    CampaignTarget,
    /// Addresses one entity; requires entity_type and entity_id at append
    EntityTarget,
}

/// Shape check over raw payload bytes
pub type PayloadValidator = Arc<dyn Fn(&[u8]) -> Result<(), String> + Send + Sync>;

/// Validator that requires the payload to decode as `T`
pub fn decode_as<T: serde::de::DeserializeOwned>() -> PayloadValidator {
    Arc::new(|bytes| {
        serde_json::from_slice::<T>(bytes)
            .map(|_| ())
            .map_err(|e| e.to_string())
    })
}

/// Validator that accepts any well-formed JSON value
pub fn any_json() -> PayloadValidator {
    decode_as::<serde_json::Value>()
}

/// Errors from registry population and validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A type was registered twice
    #[error("Type already registered: {0}")]
    DuplicateType(String),

    /// The type is not present in the registry
    #[error("Type unknown: {0}")]
    TypeUnknown(String),

    /// An entity-target event is missing its entity type
    #[error("Event {0} requires a non-empty entity_type")]
    EntityTypeRequired(String),

    /// An entity-target event is missing its entity id
    #[error("Event {0} requires a non-empty entity_id")]
    EntityIdRequired(String),

    /// The payload failed its shape check
    #[error("Payload of {type_name} is invalid: {message}")]
    PayloadInvalid {
        /// The command or event type whose payload failed
        type_name: String,
        /// Validator error text
        message: String,
    },

    /// Exactly one of system_id / system_version was present
    #[error("Event {0} carries an incomplete system routing pair")]
    SystemPairIncomplete(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Shape {
        #[allow(dead_code)]
        invite_id: String,
    }

    #[test]
    fn decode_as_accepts_matching_payloads() {
        let validator = decode_as::<Shape>();
        assert!(validator(br#"{"invite_id":"inv-1"}"#).is_ok());
    }

    #[test]
    fn decode_as_rejects_mismatched_payloads() {
        let validator = decode_as::<Shape>();
        assert!(validator(br#"{"nope":true}"#).is_err());
        assert!(validator(b"not json").is_err());
    }

    #[test]
    fn any_json_accepts_any_value() {
        let validator = any_json();
        assert!(validator(b"{}").is_ok());
        assert!(validator(b"[1,2]").is_ok());
        assert!(validator(b"\"x\"").is_ok());
        assert!(validator(b"{").is_err());
    }
}
