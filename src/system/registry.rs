// Copyright 2025 Cowboy AI, LLC.

//! Registry of game-system modules

use super::module::SystemModule;
use super::state::SystemState;
use crate::envelope::EventEnvelope;
use crate::errors::FoldError;
use crate::registry::{CommandRegistryBuilder, EventRegistryBuilder, RegistryError};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// `(id, version)` pair a campaign binds to
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SystemKey {
    /// Module id
    pub id: String,
    /// Module version
    pub version: String,
}

impl SystemKey {
    /// Build a key from its parts
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for SystemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.version)
    }
}

/// Registry of system modules, keyed by `(id, version)`
#[derive(Clone, Default)]
pub struct SystemModuleRegistry {
    modules: IndexMap<SystemKey, Arc<dyn SystemModule>>,
}

impl SystemModuleRegistry {
    /// Start an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module; a duplicate `(id, version)` is an error
    pub fn register(&mut self, module: Arc<dyn SystemModule>) -> Result<(), RegistryError> {
        let key = SystemKey::new(module.id(), module.version());
        if self.modules.contains_key(&key) {
            return Err(RegistryError::DuplicateType(key.to_string()));
        }
        self.modules.insert(key, module);
        Ok(())
    }

    /// Look up a module
    pub fn get(&self, id: &str, version: &str) -> Option<&Arc<dyn SystemModule>> {
        self.modules.get(&SystemKey::new(id, version))
    }

    /// All registered modules, in registration order
    pub fn modules(&self) -> impl Iterator<Item = &Arc<dyn SystemModule>> {
        self.modules.values()
    }

    /// True when a module owning this id prefix is registered, any version
    pub fn has_module_for_id(&self, id: &str) -> bool {
        self.modules.keys().any(|key| key.id == id)
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when no modules are registered
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Let every module register its command and event types
    pub fn register_all_types(
        &self,
        commands: &mut CommandRegistryBuilder,
        events: &mut EventRegistryBuilder,
    ) -> Result<(), RegistryError> {
        for module in self.modules.values() {
            module.register_commands(commands)?;
            module.register_events(events)?;
        }
        Ok(())
    }

    /// Route a module-owned event to its module's folder.
    ///
    /// `state` is the campaign's current state for the module, if any; a
    /// missing state is seeded through the module's factory first.
    pub fn route_event(
        &self,
        state: Option<Box<dyn SystemState>>,
        event: &EventEnvelope,
    ) -> Result<Box<dyn SystemState>, FoldError> {
        let (Some(system_id), Some(system_version)) = (&event.system_id, &event.system_version)
        else {
            return Err(FoldError::IncompleteSystemRouting {
                event_type: event.event_type.clone(),
            });
        };
        let module = self.get(system_id, system_version).ok_or_else(|| {
            FoldError::SystemModuleNotRegistered {
                system_id: system_id.clone(),
                system_version: system_version.clone(),
            }
        })?;

        let state = state.or_else(|| {
            module
                .state_factory()
                .map(|factory| factory.new_snapshot_state(&event.campaign_id))
        });

        module
            .folder()
            .apply(state, event)
            .map_err(|message| FoldError::ModuleApply {
                system_id: system_id.clone(),
                event_type: event.event_type.clone(),
                message,
            })
    }
}

// Trait objects have no useful Debug; print the keys only.
impl fmt::Debug for SystemModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemModuleRegistry")
            .field("modules", &self.modules.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::context::DecisionContext;
    use crate::decision::Decision;
    use crate::envelope::CommandEnvelope;
    use crate::system::state::downcast_state;
    use crate::system::{SystemDecider, SystemFolder, SystemStateFactory};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct FearState {
        fear: i32,
    }

    struct FearDecider;
    impl SystemDecider for FearDecider {
        fn decide(
            &self,
            _state: Option<&dyn SystemState>,
            _command: &CommandEnvelope,
            _ctx: &DecisionContext,
        ) -> Decision {
            Decision::Rejected(vec![])
        }
    }

    struct FearFolder;
    impl SystemFolder for FearFolder {
        fn apply(
            &self,
            state: Option<Box<dyn SystemState>>,
            _event: &EventEnvelope,
        ) -> Result<Box<dyn SystemState>, String> {
            let mut fear = state
                .and_then(|s| downcast_state::<FearState>(s.as_ref()).cloned())
                .ok_or_else(|| "missing fear state".to_string())?;
            fear.fear += 1;
            Ok(Box::new(fear))
        }
    }

    struct FearFactory;
    impl SystemStateFactory for FearFactory {
        fn new_snapshot_state(&self, _campaign_id: &str) -> Box<dyn SystemState> {
            Box::new(FearState::default())
        }
    }

    struct FearModule;
    impl SystemModule for FearModule {
        fn id(&self) -> &str {
            "daggerheart"
        }
        fn version(&self) -> &str {
            "v1"
        }
        fn register_commands(
            &self,
            _builder: &mut CommandRegistryBuilder,
        ) -> Result<(), RegistryError> {
            Ok(())
        }
        fn register_events(&self, _builder: &mut EventRegistryBuilder) -> Result<(), RegistryError> {
            Ok(())
        }
        fn emittable_event_types(&self) -> Vec<String> {
            vec!["daggerheart.fear_gained".to_string()]
        }
        fn decider(&self) -> &dyn SystemDecider {
            &FearDecider
        }
        fn folder(&self) -> &dyn SystemFolder {
            &FearFolder
        }
        fn state_factory(&self) -> Option<&dyn SystemStateFactory> {
            Some(&FearFactory)
        }
    }

    fn routed_event() -> EventEnvelope {
        let command = CommandEnvelope::new("daggerheart.gain_fear", "camp-1");
        EventEnvelope::from_command(
            &command,
            "daggerheart.fear_gained",
            FixedClock::at("2025-06-01T12:00:00Z").now(),
        )
        .with_system("daggerheart", "v1")
    }

    #[test]
    fn duplicate_module_registration_fails() {
        let mut registry = SystemModuleRegistry::new();
        registry.register(Arc::new(FearModule)).unwrap();
        let err = registry.register(Arc::new(FearModule)).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateType("daggerheart@v1".into()));
    }

    #[test]
    fn route_event_seeds_state_from_factory() {
        let mut registry = SystemModuleRegistry::new();
        registry.register(Arc::new(FearModule)).unwrap();

        let next = registry.route_event(None, &routed_event()).unwrap();
        assert_eq!(downcast_state::<FearState>(next.as_ref()).unwrap().fear, 1);
    }

    #[test]
    fn route_event_threads_existing_state() {
        let mut registry = SystemModuleRegistry::new();
        registry.register(Arc::new(FearModule)).unwrap();

        let existing: Box<dyn SystemState> = Box::new(FearState { fear: 5 });
        let next = registry.route_event(Some(existing), &routed_event()).unwrap();
        assert_eq!(downcast_state::<FearState>(next.as_ref()).unwrap().fear, 6);
    }

    #[test]
    fn route_event_requires_registered_module() {
        let registry = SystemModuleRegistry::new();
        let err = registry.route_event(None, &routed_event()).unwrap_err();
        assert!(matches!(err, FoldError::SystemModuleNotRegistered { .. }));
    }

    #[test]
    fn route_event_requires_complete_pair() {
        let mut registry = SystemModuleRegistry::new();
        registry.register(Arc::new(FearModule)).unwrap();

        let mut event = routed_event();
        event.system_version = None;
        let err = registry.route_event(None, &event).unwrap_err();
        assert!(matches!(err, FoldError::IncompleteSystemRouting { .. }));
    }
}
