// Copyright 2025 Cowboy AI, LLC.

//! Decider outcomes
//!
//! A decider answers a command with exactly one [`Decision`]: a list of
//! events to append, or a list of rejections. Rejection codes are stable,
//! uppercase, underscore-delimited identifiers and are part of the external
//! contract; messages are for humans and carry no stability promise.

use crate::envelope::EventEnvelope;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A command rejection with a stable code and a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rejection {
    /// Stable uppercase code, e.g. `CHARACTER_ALREADY_EXISTS`
    pub code: String,
    /// Human-readable explanation
    pub message: String,
}

impl Rejection {
    /// Build a rejection from a code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Outcome of deciding one command
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// The command was accepted; append these events in order
    Accepted(Vec<EventEnvelope>),
    /// The command was rejected; nothing is appended
    Rejected(Vec<Rejection>),
}

impl Decision {
    /// Accept with a single event
    pub fn accept(event: EventEnvelope) -> Self {
        Decision::Accepted(vec![event])
    }

    /// Accept with several events, applied in emission order
    pub fn accept_all(events: Vec<EventEnvelope>) -> Self {
        Decision::Accepted(events)
    }

    /// Reject with a single code and message
    pub fn reject(code: impl Into<String>, message: impl Into<String>) -> Self {
        Decision::Rejected(vec![Rejection::new(code, message)])
    }

    /// True when the command was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted(_))
    }

    /// Events of an accepted decision, empty slice when rejected
    pub fn events(&self) -> &[EventEnvelope] {
        match self {
            Decision::Accepted(events) => events,
            Decision::Rejected(_) => &[],
        }
    }

    /// Rejections of a rejected decision, empty slice when accepted
    pub fn rejections(&self) -> &[Rejection] {
        match self {
            Decision::Accepted(_) => &[],
            Decision::Rejected(rejections) => rejections,
        }
    }
}

impl From<Rejection> for Decision {
    fn from(rejection: Rejection) -> Self {
        Decision::Rejected(vec![rejection])
    }
}
