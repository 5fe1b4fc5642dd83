// Copyright 2025 Cowboy AI, LLC.

//! Command and event envelopes
//!
//! The envelope is the only header the core reads. Commands carry intent and
//! identity; events carry the same identity plus a timestamp, entity
//! addressing, and optional system-module routing. Envelopes are immutable
//! once constructed: deciders treat the command envelope as input only, and
//! events never change after they are appended.
//!
//! An emitted event inherits the actor, session, request, invocation,
//! correlation, and causation fields of the command that produced it.

use crate::labels::ActorType;
use crate::payload::PayloadJson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity type names used for entity-target addressing
pub mod entity_types {
    /// Participant entities, keyed by participant id
    pub const PARTICIPANT: &str = "participant";
    /// Character entities, keyed by character id
    pub const CHARACTER: &str = "character";
    /// Invite entities, keyed by invite id
    pub const INVITE: &str = "invite";
}

/// A command submitted against one campaign
///
/// The envelope authenticates nothing by itself; the command registry checks
/// the type and payload shape, and the subdomain decider checks the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    /// Command type, e.g. `character.create`
    #[serde(rename = "type")]
    pub command_type: String,
    /// Campaign the command addresses
    pub campaign_id: String,
    /// Who issued the command
    pub actor_type: ActorType,
    /// Issuer's id (participant id or system actor name)
    pub actor_id: String,
    /// Active session, when the command was issued inside one
    pub session_id: String,
    /// Caller-supplied idempotency key
    pub request_id: String,
    /// Single pipeline invocation this command belongs to
    pub invocation_id: String,
    /// Correlation across a whole exchange
    pub correlation_id: String,
    /// The message that caused this command
    pub causation_id: String,
    /// Opaque payload bytes
    pub payload_json: PayloadJson,
}

impl CommandEnvelope {
    /// New command with empty identity fields; fill them with the `with_*`
    /// builders.
    pub fn new(command_type: impl Into<String>, campaign_id: impl Into<String>) -> Self {
        Self {
            command_type: command_type.into(),
            campaign_id: campaign_id.into(),
            actor_type: ActorType::Participant,
            actor_id: String::new(),
            session_id: String::new(),
            request_id: String::new(),
            invocation_id: String::new(),
            correlation_id: String::new(),
            causation_id: String::new(),
            payload_json: PayloadJson::empty(),
        }
    }

    /// Set the issuing actor
    pub fn with_actor(mut self, actor_type: ActorType, actor_id: impl Into<String>) -> Self {
        self.actor_type = actor_type;
        self.actor_id = actor_id.into();
        self
    }

    /// Set the active session
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    /// Set request and invocation identity
    pub fn with_request(
        mut self,
        request_id: impl Into<String>,
        invocation_id: impl Into<String>,
    ) -> Self {
        self.request_id = request_id.into();
        self.invocation_id = invocation_id.into();
        self
    }

    /// Set correlation and causation identity
    pub fn with_correlation(
        mut self,
        correlation_id: impl Into<String>,
        causation_id: impl Into<String>,
    ) -> Self {
        self.correlation_id = correlation_id.into();
        self.causation_id = causation_id.into();
        self
    }

    /// Attach raw payload bytes
    pub fn with_payload(mut self, payload: PayloadJson) -> Self {
        self.payload_json = payload;
        self
    }

    /// Serialize and attach a typed payload
    pub fn encode_payload<T: Serialize>(mut self, payload: &T) -> Result<Self, serde_json::Error> {
        self.payload_json = PayloadJson::encode(payload)?;
        Ok(self)
    }
}

/// An immutable fact appended to a campaign's journal
///
/// Field order is canonical and matches the wire contract. Events for one
/// campaign are strictly ordered by the journal; the envelope itself carries
/// no sequence number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Event type, e.g. `character.created`
    #[serde(rename = "type")]
    pub event_type: String,
    /// Campaign the event belongs to
    pub campaign_id: String,
    /// UTC instant the event was decided
    pub timestamp: DateTime<Utc>,
    /// Actor copied from the causing command
    pub actor_type: ActorType,
    /// Actor id copied from the causing command
    pub actor_id: String,
    /// Session copied from the causing command
    pub session_id: String,
    /// Request id copied from the causing command
    pub request_id: String,
    /// Invocation id copied from the causing command
    pub invocation_id: String,
    /// Entity type for entity-target events, empty for campaign targets
    #[serde(default)]
    pub entity_type: String,
    /// Entity id for entity-target events, empty for campaign targets
    #[serde(default)]
    pub entity_id: String,
    /// Correlation copied from the causing command
    pub correlation_id: String,
    /// Causation copied from the causing command
    pub causation_id: String,
    /// System module id, present only on module-owned events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_id: Option<String>,
    /// System module version, present only on module-owned events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_version: Option<String>,
    /// Opaque payload bytes
    pub payload_json: PayloadJson,
}

impl EventEnvelope {
    /// Emit an event from a command, inheriting the command's identity
    /// fields and stamping the given instant.
    pub fn from_command(
        command: &CommandEnvelope,
        event_type: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            campaign_id: command.campaign_id.clone(),
            timestamp: at,
            actor_type: command.actor_type,
            actor_id: command.actor_id.clone(),
            session_id: command.session_id.clone(),
            request_id: command.request_id.clone(),
            invocation_id: command.invocation_id.clone(),
            entity_type: String::new(),
            entity_id: String::new(),
            correlation_id: command.correlation_id.clone(),
            causation_id: command.causation_id.clone(),
            system_id: None,
            system_version: None,
            payload_json: PayloadJson::empty(),
        }
    }

    /// Address the event at one entity
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = entity_type.into();
        self.entity_id = entity_id.into();
        self
    }

    /// Route the event through a system module
    pub fn with_system(
        mut self,
        system_id: impl Into<String>,
        system_version: impl Into<String>,
    ) -> Self {
        self.system_id = Some(system_id.into());
        self.system_version = Some(system_version.into());
        self
    }

    /// Attach raw payload bytes
    pub fn with_payload(mut self, payload: PayloadJson) -> Self {
        self.payload_json = payload;
        self
    }

    /// Serialize and attach a typed payload
    pub fn encode_payload<T: Serialize>(mut self, payload: &T) -> Result<Self, serde_json::Error> {
        self.payload_json = PayloadJson::encode(payload)?;
        Ok(self)
    }

    /// True when both system routing fields are present
    pub fn has_system_routing(&self) -> bool {
        self.system_id.is_some() && self.system_version.is_some()
    }

    /// True when exactly one system routing field is present, which is
    /// always invalid.
    pub fn has_partial_system_routing(&self) -> bool {
        self.system_id.is_some() != self.system_version.is_some()
    }
}
