// Copyright 2025 Cowboy AI, LLC.

//! The campaign aggregate
//!
//! One campaign's state, derived purely from its event journal, plus the
//! folder that applies events to it. The same folder runs at command time
//! and during historical replay; nothing else may mutate the state.

pub mod folder;
pub mod state;

pub use folder::{fold_dispatched_types, AggregateFolder};
pub use state::{AggregateState, SystemStates};
