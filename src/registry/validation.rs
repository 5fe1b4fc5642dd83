// Copyright 2025 Cowboy AI, LLC.

//! Startup consistency validation
//!
//! Run once after the registries and the module registry are populated and
//! before any command is accepted. Every failure here is fatal: a registry
//! that passes cannot later route an event nowhere.

use super::{CommandRegistry, EventIntent, EventRegistry, Owner};
use crate::aggregate::fold_dispatched_types;
use crate::system::SystemModuleRegistry;
use std::collections::BTreeSet;
use thiserror::Error;

/// One startup consistency failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A fold-visible event type is reachable by no fold
    #[error("event {event_type} is fold-visible but no fold dispatches it")]
    EventUnreachable {
        /// The orphaned event type
        event_type: String,
    },

    /// A system-owned event type has no module for its prefix
    #[error("system event {event_type} has no registered module for prefix {prefix}")]
    SystemEventWithoutModule {
        /// The orphaned event type
        event_type: String,
        /// The namespace prefix that failed to resolve
        prefix: String,
    },

    /// A system-owned command type has no module for its prefix
    #[error("system command {command_type} has no registered module for prefix {prefix}")]
    SystemCommandWithoutModule {
        /// The orphaned command type
        command_type: String,
        /// The namespace prefix that failed to resolve
        prefix: String,
    },

    /// A module claims to emit an event type nobody registered
    #[error("module {module} emits unregistered event type {event_type}")]
    EmittableTypeUnregistered {
        /// The module `(id@version)` making the claim
        module: String,
        /// The unregistered event type
        event_type: String,
    },
}

/// Namespace prefix of a type string: everything before the first dot
fn type_prefix(type_name: &str) -> &str {
    type_name.split('.').next().unwrap_or(type_name)
}

/// Confirm the registries, fold table, and module registry agree.
///
/// Returns every inconsistency found, not just the first, so a startup log
/// can show the whole picture.
pub fn validate_registries(
    commands: &CommandRegistry,
    events: &EventRegistry,
    modules: &SystemModuleRegistry,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let dispatched: BTreeSet<&str> = fold_dispatched_types().into_iter().collect();
    let emittable: BTreeSet<String> = modules
        .modules()
        .flat_map(|module| module.emittable_event_types())
        .collect();

    for definition in events.definitions() {
        let event_type = definition.event_type.as_str();

        if definition.intent == EventIntent::ProjectionAndReplay
            && !dispatched.contains(event_type)
            && !emittable.contains(event_type)
        {
            errors.push(ValidationError::EventUnreachable {
                event_type: event_type.to_string(),
            });
        }

        if definition.owner == Owner::System {
            let prefix = type_prefix(event_type);
            if !modules.has_module_for_id(prefix) {
                errors.push(ValidationError::SystemEventWithoutModule {
                    event_type: event_type.to_string(),
                    prefix: prefix.to_string(),
                });
            }
        }
    }

    for definition in commands.definitions() {
        if definition.owner == Owner::System {
            let prefix = type_prefix(&definition.command_type);
            if !modules.has_module_for_id(prefix) {
                errors.push(ValidationError::SystemCommandWithoutModule {
                    command_type: definition.command_type.clone(),
                    prefix: prefix.to_string(),
                });
            }
        }
    }

    for module in modules.modules() {
        let module_name = format!("{}@{}", module.id(), module.version());
        for event_type in module.emittable_event_types() {
            if !events.contains(&event_type) {
                errors.push(ValidationError::EmittableTypeUnregistered {
                    module: module_name.clone(),
                    event_type,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::DecisionContext;
    use crate::decision::Decision;
    use crate::envelope::{CommandEnvelope, EventEnvelope};
    use crate::registry::{
        any_json, CommandDefinition, CommandRegistryBuilder, EventAddressing, EventDefinition,
        EventRegistryBuilder,
    };
    use crate::system::{SystemDecider, SystemFolder, SystemModule, SystemState};
    use std::sync::Arc;

    struct NullDecider;
    impl SystemDecider for NullDecider {
        fn decide(
            &self,
            _state: Option<&dyn SystemState>,
            _command: &CommandEnvelope,
            _ctx: &DecisionContext,
        ) -> Decision {
            Decision::Rejected(vec![])
        }
    }

    struct NullFolder;
    impl SystemFolder for NullFolder {
        fn apply(
            &self,
            _state: Option<Box<dyn SystemState>>,
            _event: &EventEnvelope,
        ) -> Result<Box<dyn SystemState>, String> {
            Ok(Box::new(()))
        }
    }

    struct Module {
        emits: Vec<String>,
    }
    impl SystemModule for Module {
        fn id(&self) -> &str {
            "daggerheart"
        }
        fn version(&self) -> &str {
            "v1"
        }
        fn register_commands(
            &self,
            _builder: &mut CommandRegistryBuilder,
        ) -> Result<(), crate::registry::RegistryError> {
            Ok(())
        }
        fn register_events(
            &self,
            _builder: &mut EventRegistryBuilder,
        ) -> Result<(), crate::registry::RegistryError> {
            Ok(())
        }
        fn emittable_event_types(&self) -> Vec<String> {
            self.emits.clone()
        }
        fn decider(&self) -> &dyn SystemDecider {
            &NullDecider
        }
        fn folder(&self) -> &dyn SystemFolder {
            &NullFolder
        }
    }

    fn core_registries() -> (CommandRegistry, EventRegistry) {
        let mut commands = CommandRegistryBuilder::new();
        commands.register_all(crate::campaign::command_definitions()).unwrap();
        let mut events = EventRegistryBuilder::new();
        events.register_all(crate::campaign::event_definitions()).unwrap();
        (commands.build(), events.build())
    }

    #[test]
    fn consistent_core_registries_validate() {
        let (commands, events) = core_registries();
        let modules = SystemModuleRegistry::new();
        assert!(validate_registries(&commands, &events, &modules).is_ok());
    }

    #[test]
    fn unreachable_fold_visible_event_is_reported() {
        let (commands, _) = core_registries();
        let mut events = EventRegistryBuilder::new();
        events
            .register(EventDefinition::new(
                "narrative.beat_shifted",
                Owner::Core,
                EventIntent::ProjectionAndReplay,
                EventAddressing::CampaignTarget,
                any_json(),
            ))
            .unwrap();
        let events = events.build();
        let modules = SystemModuleRegistry::new();

        let errors = validate_registries(&commands, &events, &modules).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EventUnreachable {
                event_type: "narrative.beat_shifted".to_string()
            }]
        );
    }

    #[test]
    fn audit_only_events_need_no_fold() {
        let (commands, _) = core_registries();
        let mut events = EventRegistryBuilder::new();
        events
            .register(EventDefinition::new(
                "campaign.note_audited",
                Owner::Core,
                EventIntent::AuditOnly,
                EventAddressing::CampaignTarget,
                any_json(),
            ))
            .unwrap();
        let events = events.build();
        let modules = SystemModuleRegistry::new();
        assert!(validate_registries(&commands, &events, &modules).is_ok());
    }

    #[test]
    fn system_types_need_a_module_matching_their_prefix() {
        let mut commands = CommandRegistryBuilder::new();
        commands
            .register(CommandDefinition::new(
                "daggerheart.gain_fear",
                Owner::System,
                any_json(),
            ))
            .unwrap();
        let commands = commands.build();

        let mut events = EventRegistryBuilder::new();
        events
            .register(EventDefinition::new(
                "daggerheart.fear_gained",
                Owner::System,
                EventIntent::ProjectionAndReplay,
                EventAddressing::CampaignTarget,
                any_json(),
            ))
            .unwrap();
        let events = events.build();

        // Without the module: two prefix failures (event is emittable once
        // the module exists, so no reachability error then)
        let empty = SystemModuleRegistry::new();
        let errors = validate_registries(&commands, &events, &empty).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::SystemEventWithoutModule { prefix, .. } if prefix == "daggerheart")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::SystemCommandWithoutModule { prefix, .. } if prefix == "daggerheart")));

        // With the module everything lines up
        let mut modules = SystemModuleRegistry::new();
        modules
            .register(Arc::new(Module {
                emits: vec!["daggerheart.fear_gained".to_string()],
            }))
            .unwrap();
        assert!(validate_registries(&commands, &events, &modules).is_ok());
    }

    #[test]
    fn modules_cannot_emit_unregistered_types() {
        let (commands, events) = core_registries();
        let mut modules = SystemModuleRegistry::new();
        modules
            .register(Arc::new(Module {
                emits: vec!["daggerheart.hope_spent".to_string()],
            }))
            .unwrap();

        let errors = validate_registries(&commands, &events, &modules).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmittableTypeUnregistered {
                module: "daggerheart@v1".to_string(),
                event_type: "daggerheart.hope_spent".to_string()
            }]
        );
    }
}
