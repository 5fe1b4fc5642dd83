// Copyright 2025 Cowboy AI, LLC.

//! Event journal collaborator
//!
//! The journal is the only authoritative store. The core appends accepted
//! events and streams them back during replay; everything else is derived.
//! Appends are at-least-once; callers dedupe via the envelope's request id.

use crate::envelope::EventEnvelope;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors from the journal collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JournalError {
    /// The append was refused or lost
    #[error("journal append failed: {0}")]
    AppendFailed(String),

    /// The campaign has no journal stream
    #[error("no journal stream for campaign {0}")]
    StreamNotFound(String),

    /// The underlying store failed
    #[error("journal storage error: {0}")]
    Storage(String),
}

/// Append-only, per-campaign ordered event store
#[async_trait]
pub trait Journal: Send + Sync {
    /// Append events to a campaign's stream in order; returns the sequence
    /// number assigned to the first appended event (1-based).
    async fn append(
        &self,
        campaign_id: &str,
        events: Vec<EventEnvelope>,
    ) -> Result<u64, JournalError>;

    /// Load a campaign's full stream in journal order
    async fn load(&self, campaign_id: &str) -> Result<Vec<EventEnvelope>, JournalError>;
}

/// In-memory journal for tests and examples
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournal {
    streams: Arc<RwLock<HashMap<String, Vec<EventEnvelope>>>>,
}

impl InMemoryJournal {
    /// Create an empty journal
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events stored for a campaign
    pub async fn stream_len(&self, campaign_id: &str) -> usize {
        self.streams
            .read()
            .await
            .get(campaign_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait]
impl Journal for InMemoryJournal {
    async fn append(
        &self,
        campaign_id: &str,
        events: Vec<EventEnvelope>,
    ) -> Result<u64, JournalError> {
        let mut streams = self.streams.write().await;
        let stream = streams.entry(campaign_id.to_string()).or_default();
        let start_seq = stream.len() as u64 + 1;
        stream.extend(events);
        Ok(start_seq)
    }

    async fn load(&self, campaign_id: &str) -> Result<Vec<EventEnvelope>, JournalError> {
        Ok(self
            .streams
            .read()
            .await
            .get(campaign_id)
            .cloned()
            .unwrap_or_default())
    }
}
