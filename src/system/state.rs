// Copyright 2025 Cowboy AI, LLC.

//! Type-erased module state
//!
//! Module state has a shape only its module knows. The aggregate stores it
//! behind [`SystemState`], which keeps the pieces the core needs: cloning
//! for state snapshots, equality for determinism checks, and downcasting at
//! the module boundary.

use std::any::Any;
use std::fmt::Debug;

/// Opaque per-module state stored inside the aggregate
pub trait SystemState: Any + Debug + Send + Sync {
    /// Clone into a new box
    fn clone_box(&self) -> Box<dyn SystemState>;

    /// View as [`Any`] for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Structural equality across the erased boundary
    fn eq_box(&self, other: &dyn SystemState) -> bool;
}

impl<T> SystemState for T
where
    T: Any + Debug + Send + Sync + Clone + PartialEq,
{
    fn clone_box(&self) -> Box<dyn SystemState> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_box(&self, other: &dyn SystemState) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl Clone for Box<dyn SystemState> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for Box<dyn SystemState> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_box(other.as_ref())
    }
}

/// Downcast erased module state back to its concrete type
pub fn downcast_state<T: 'static>(state: &dyn SystemState) -> Option<&T> {
    state.as_any().downcast_ref::<T>()
}
