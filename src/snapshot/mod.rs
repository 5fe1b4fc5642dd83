// Copyright 2025 Cowboy AI, LLC.

//! Snapshot projections and continuity values
//!
//! Snapshots are caches over the journal, never authoritative. The GM Fear
//! track is the canonical continuity value; [`SnapshotPolicy`] decides when
//! the surrounding layer persists, and [`Projection`] is the contract for
//! read models fed from the journal.

pub mod gm_fear;
pub mod policy;

pub use gm_fear::{apply_gm_fear_gain, apply_gm_fear_spend, GmFear, GmFearChange, GmFearError, GM_FEAR_MAX};
pub use policy::SnapshotPolicy;

use crate::envelope::EventEnvelope;
use async_trait::async_trait;

/// Trait for all projections (read models)
///
/// Projections define how to build optimized read models from events. The
/// actual storage and checkpointing are infrastructure concerns.
#[async_trait]
pub trait Projection: Send + Sync {
    /// Handle an event to update the projection
    async fn handle_event(&mut self, event: &EventEnvelope) -> Result<(), String>;

    /// Clear the projection (for rebuilding)
    async fn clear(&mut self) -> Result<(), String>;
}
