// Copyright 2025 Cowboy AI, LLC.

//! Replay service
//!
//! Streams a campaign's journal through the aggregate folder to rebuild
//! state. The folder is the same one used at command time; replay adds only
//! the plumbing and the stats. A fold error halts replay at the failing
//! event and must not advance any stream cursor past it.

use crate::aggregate::{AggregateFolder, AggregateState};
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;
use crate::journal::{Journal, JournalError};
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Instant;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during replay
#[derive(Debug, Error)]
pub enum ReplayError {
    /// Error from the journal collaborator
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),

    /// A fold failed; the journal is corrupt at this event
    #[error("fold error during replay: {0}")]
    Fold(#[from] FoldError),
}

/// Statistics collected during one replay
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayStats {
    /// Number of events folded
    pub events_processed: u64,
    /// Total duration in milliseconds
    pub duration_ms: u64,
    /// Average events folded per second
    pub events_per_second: f64,
}

/// Rebuild a campaign's aggregate state from its full journal
pub async fn replay_campaign(
    journal: &dyn Journal,
    folder: &AggregateFolder<'_>,
    campaign_id: &str,
) -> Result<(AggregateState, ReplayStats), ReplayError> {
    let events = journal.load(campaign_id).await?;
    let mut state = AggregateState::new();
    let stats = replay_events(folder, &mut state, futures::stream::iter(events)).await?;
    info!(
        campaign_id,
        events = stats.events_processed,
        duration_ms = stats.duration_ms,
        "campaign replayed"
    );
    Ok((state, stats))
}

/// Fold a stream of events into existing state, in stream order
pub async fn replay_events(
    folder: &AggregateFolder<'_>,
    state: &mut AggregateState,
    events: impl Stream<Item = EventEnvelope>,
) -> Result<ReplayStats, ReplayError> {
    let started = Instant::now();
    let mut processed: u64 = 0;

    futures::pin_mut!(events);
    while let Some(event) = events.next().await {
        folder.fold(state, &event)?;
        processed += 1;
    }

    let elapsed = started.elapsed();
    let duration_ms = elapsed.as_millis() as u64;
    let events_per_second = if elapsed.as_secs_f64() > 0.0 {
        processed as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    Ok(ReplayStats {
        events_processed: processed,
        duration_ms,
        events_per_second,
    })
}
