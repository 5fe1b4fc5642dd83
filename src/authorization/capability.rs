// Copyright 2025 Cowboy AI, LLC.

//! Capabilities: what is being attempted on what

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the actor is trying to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthzAction {
    /// Administrative control over the resource
    Manage,
    /// Change the resource's content
    Mutate,
    /// Observe the resource
    Read,
}

/// What the action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuthzResource {
    /// The active session
    Session,
    /// A participant seat
    Participant,
    /// A character
    Character,
    /// An invite
    Invite,
    /// The campaign record
    Campaign,
}

/// An `(action, resource)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Capability {
    /// What is being attempted
    pub action: AuthzAction,
    /// What it targets
    pub resource: AuthzResource,
}

impl Capability {
    /// Build a capability from its parts
    pub fn new(action: AuthzAction, resource: AuthzResource) -> Self {
        Self { action, resource }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.action {
            AuthzAction::Manage => "manage",
            AuthzAction::Mutate => "mutate",
            AuthzAction::Read => "read",
        };
        let resource = match self.resource {
            AuthzResource::Session => "session",
            AuthzResource::Participant => "participant",
            AuthzResource::Character => "character",
            AuthzResource::Invite => "invite",
            AuthzResource::Campaign => "campaign",
        };
        write!(f, "{action}:{resource}")
    }
}
