// Copyright 2025 Cowboy AI, LLC.

//! Typed command definitions and the command registry

use super::{Owner, PayloadValidator, RegistryError};
use crate::envelope::CommandEnvelope;
use indexmap::IndexMap;

/// Definition of one command type
#[derive(Clone)]
pub struct CommandDefinition {
    /// The command type string, e.g. `invite.claim`
    pub command_type: String,
    /// Who owns the type
    pub owner: Owner,
    validate: PayloadValidator,
}

impl CommandDefinition {
    /// Define a command type with its payload validator
    pub fn new(
        command_type: impl Into<String>,
        owner: Owner,
        validate: PayloadValidator,
    ) -> Self {
        Self {
            command_type: command_type.into(),
            owner,
            validate,
        }
    }

    /// Run the payload shape check
    pub fn validate_payload(&self, bytes: &[u8]) -> Result<(), String> {
        (self.validate)(bytes)
    }
}

impl std::fmt::Debug for CommandDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDefinition")
            .field("command_type", &self.command_type)
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

/// Builder that populates a command registry at startup
#[derive(Debug, Default)]
pub struct CommandRegistryBuilder {
    definitions: IndexMap<String, CommandDefinition>,
}

impl CommandRegistryBuilder {
    /// Start an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition; a duplicate type is an error
    pub fn register(&mut self, definition: CommandDefinition) -> Result<(), RegistryError> {
        if self.definitions.contains_key(&definition.command_type) {
            return Err(RegistryError::DuplicateType(definition.command_type));
        }
        self.definitions
            .insert(definition.command_type.clone(), definition);
        Ok(())
    }

    /// Register many definitions in order
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = CommandDefinition>,
    ) -> Result<(), RegistryError> {
        for definition in definitions {
            self.register(definition)?;
        }
        Ok(())
    }

    /// Freeze into an immutable registry
    pub fn build(self) -> CommandRegistry {
        CommandRegistry {
            definitions: self.definitions,
        }
    }
}

/// Immutable registry of command types
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    definitions: IndexMap<String, CommandDefinition>,
}

impl CommandRegistry {
    /// Look up a definition by type
    pub fn definition(&self, command_type: &str) -> Option<&CommandDefinition> {
        self.definitions.get(command_type)
    }

    /// True when the type is registered
    pub fn contains(&self, command_type: &str) -> bool {
        self.definitions.contains_key(command_type)
    }

    /// All registered types, in registration order
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// All definitions, in registration order
    pub fn definitions(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.definitions.values()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no types are registered
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Authenticate a command's shape before it reaches a decider: the type
    /// must be known and the payload must pass the type's validator.
    pub fn validate_for_decision(&self, command: &CommandEnvelope) -> Result<(), RegistryError> {
        let definition = self
            .definition(&command.command_type)
            .ok_or_else(|| RegistryError::TypeUnknown(command.command_type.clone()))?;
        definition
            .validate_payload(command.payload_json.as_bytes())
            .map_err(|message| RegistryError::PayloadInvalid {
                type_name: command.command_type.clone(),
                message,
            })
    }
}
