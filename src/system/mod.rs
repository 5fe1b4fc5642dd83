// Copyright 2025 Cowboy AI, LLC.

//! Game-system modules
//!
//! A system module owns a namespaced set of command and event types (the
//! namespace is the module id, e.g. `daggerheart.*`) together with its own
//! opaque slice of aggregate state. The core routes module-owned events to
//! the module's folder and otherwise treats the state as a sealed box.

pub mod module;
pub mod registry;
pub mod state;

pub use module::{SystemDecider, SystemFolder, SystemModule, SystemStateFactory};
pub use registry::{SystemKey, SystemModuleRegistry};
pub use state::{downcast_state, SystemState};
