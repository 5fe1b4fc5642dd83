// Copyright 2025 Cowboy AI, LLC.

//! Ambient inputs handed to deciders
//!
//! A decider sees exactly two collaborators: the injected clock and the
//! asset catalog. Everything else it needs is in its state slice and the
//! command envelope.

use crate::catalog::{AssetCatalog, PassthroughAssetCatalog};
use crate::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};

static SYSTEM_CLOCK: SystemClock = SystemClock;
static PASSTHROUGH_CATALOG: PassthroughAssetCatalog = PassthroughAssetCatalog;

/// Collaborators available while deciding one command
#[derive(Clone, Copy)]
pub struct DecisionContext<'a> {
    /// Injected clock; the only time a decider may observe
    pub clock: &'a dyn Clock,
    /// Avatar selection resolver
    pub catalog: &'a dyn AssetCatalog,
}

impl<'a> DecisionContext<'a> {
    /// Bundle the collaborators
    pub fn new(clock: &'a dyn Clock, catalog: &'a dyn AssetCatalog) -> Self {
        Self { clock, catalog }
    }

    /// The instant emitted events will carry
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl DecisionContext<'static> {
    /// Context with the system UTC clock and a passthrough catalog.
    ///
    /// Used when the caller supplies no clock of its own; tests always
    /// inject a deterministic one instead.
    pub fn system() -> Self {
        Self {
            clock: &SYSTEM_CLOCK,
            catalog: &PASSTHROUGH_CATALOG,
        }
    }
}
