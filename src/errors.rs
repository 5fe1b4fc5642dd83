// Copyright 2025 Cowboy AI, LLC.

//! Replay-path errors
//!
//! The crate has exactly two failure taxonomies. Command-path refusals are
//! [`Rejection`](crate::decision::Rejection) values returned by deciders;
//! they are part of the external contract and never surface as errors.
//! Everything here is the other taxonomy: fold errors, which mean the
//! journal handed us an event the fold layer cannot apply.

use thiserror::Error;

/// Errors raised while folding an event into aggregate state.
///
/// A fold error means the journal handed us an event the fold layer cannot
/// apply: a corrupt payload, a misaddressed entity event, or a system event
/// with no registered module. The caller must abort the batch and must not
/// advance the stream cursor past the failing event.
#[derive(Debug, Error)]
pub enum FoldError {
    /// The event type is not handled by any fold table entry
    #[error("No fold handler for event type {event_type}")]
    UnhandledEventType {
        /// The unhandled event type
        event_type: String,
    },

    /// An entity-keyed fold received an event with an empty entity id
    #[error("Event {event_type} requires a non-empty entity_id")]
    EntityIdRequired {
        /// The offending event type
        event_type: String,
    },

    /// The event payload failed to decode (journal corruption)
    #[error("Payload of {event_type} failed to decode: {message}")]
    PayloadDecode {
        /// The offending event type
        event_type: String,
        /// Decoder error text
        message: String,
    },

    /// Exactly one of system_id / system_version was set on the event
    #[error("Event {event_type} carries an incomplete system routing pair")]
    IncompleteSystemRouting {
        /// The offending event type
        event_type: String,
    },

    /// The event routed to a system module that is not registered
    #[error("No system module registered for {system_id}@{system_version}")]
    SystemModuleNotRegistered {
        /// Module id the event asked for
        system_id: String,
        /// Module version the event asked for
        system_version: String,
    },

    /// A system module failed to apply the event
    #[error("System module {system_id} failed to apply {event_type}: {message}")]
    ModuleApply {
        /// Module id that failed
        system_id: String,
        /// The offending event type
        event_type: String,
        /// Module-provided error text
        message: String,
    },
}

impl FoldError {
    /// Build a payload decode error from a serde_json failure
    pub fn payload_decode(event_type: &str, err: serde_json::Error) -> Self {
        FoldError::PayloadDecode {
            event_type: event_type.to_string(),
            message: err.to_string(),
        }
    }
}
