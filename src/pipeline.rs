// Copyright 2025 Cowboy AI, LLC.

//! Command pipeline
//!
//! Ties the pieces together for one campaign: validate the command's shape,
//! route it to its subdomain or module decider, append accepted events to
//! the journal, then fold them into the cached aggregate. All mutation for
//! one campaign runs under that campaign's writer lock; campaigns proceed
//! in parallel.

use crate::aggregate::{AggregateFolder, AggregateState};
use crate::catalog::AssetCatalog;
use crate::clock::Clock;
use crate::context::DecisionContext;
use crate::decision::{Decision, Rejection};
use crate::envelope::CommandEnvelope;
use crate::errors::FoldError;
use crate::journal::{Journal, JournalError};
use crate::registry::validation::{validate_registries, ValidationError};
use crate::registry::{CommandRegistry, EventRegistry, RegistryError};
use crate::system::{SystemKey, SystemModuleRegistry};
use crate::{action, campaign, character, invite, participant, session};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// The command's type prefix matched no subdomain and no module
pub const COMMAND_SCOPE_UNKNOWN: &str = "COMMAND_SCOPE_UNKNOWN";
/// A module-owned command arrived for a campaign not bound to that module
pub const SYSTEM_NOT_BOUND: &str = "SYSTEM_NOT_BOUND";

/// Route a validated command to its subdomain or module decider.
///
/// Module-owned commands resolve through the campaign's bound system; the
/// module sees only its own state slice.
pub fn route_command(
    state: &AggregateState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
    modules: &SystemModuleRegistry,
) -> Decision {
    let prefix = command
        .command_type
        .split('.')
        .next()
        .unwrap_or_default();

    match prefix {
        "campaign" => campaign::decide(&state.campaign, command, ctx),
        "session" => session::decide(&state.session, command, ctx),
        "action" => action::decide(&state.action, command, ctx),
        "participant" => participant::decide(&state.participants, command, ctx),
        "character" => character::decide(&state.characters, command, ctx),
        "invite" => invite::decide(&state.invites, command, ctx),
        _ if modules.has_module_for_id(prefix) => {
            if state.campaign.system_id != prefix {
                return Decision::reject(
                    SYSTEM_NOT_BOUND,
                    format!("campaign is not bound to system {prefix}"),
                );
            }
            let key = SystemKey::new(
                state.campaign.system_id.clone(),
                state.campaign.system_version.clone(),
            );
            let Some(module) = modules.get(&key.id, &key.version) else {
                return Decision::reject(
                    SYSTEM_NOT_BOUND,
                    format!("no module registered for {key}"),
                );
            };
            module
                .decider()
                .decide(state.systems.get(&key), command, ctx)
        }
        _ => Decision::reject(
            COMMAND_SCOPE_UNKNOWN,
            format!("no subdomain handles {}", command.command_type),
        ),
    }
}

/// Errors from the outer pipeline; rejections are not errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The command or an emitted event failed registry validation
    #[error("registry validation failed: {0}")]
    Registry(#[from] RegistryError),

    /// The journal refused the append
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),

    /// Folding an accepted event failed; the command path is aborted
    #[error("fold error: {0}")]
    Fold(#[from] FoldError),
}

/// Outcome of processing one command
#[derive(Debug)]
pub enum CommandOutcome {
    /// Events were appended starting at this journal sequence
    Accepted {
        /// Journal sequence of the first appended event
        start_seq: u64,
        /// The appended events, in order
        events: Vec<crate::envelope::EventEnvelope>,
    },
    /// The decider refused the command; nothing was appended
    Rejected(Vec<Rejection>),
}

struct CampaignSlot {
    state: AggregateState,
    replayed: bool,
}

/// One process's engine over a set of campaigns
///
/// Holds the frozen registries and a per-campaign writer lock. Construction
/// runs startup validation; an engine that exists can route every event it
/// will ever accept.
pub struct CampaignEngine {
    commands: CommandRegistry,
    events: EventRegistry,
    modules: SystemModuleRegistry,
    journal: Arc<dyn Journal>,
    clock: Arc<dyn Clock>,
    catalog: Arc<dyn AssetCatalog>,
    campaigns: Mutex<HashMap<String, Arc<Mutex<CampaignSlot>>>>,
}

impl CampaignEngine {
    /// Build an engine; fails when the registries are inconsistent
    pub fn new(
        commands: CommandRegistry,
        events: EventRegistry,
        modules: SystemModuleRegistry,
        journal: Arc<dyn Journal>,
        clock: Arc<dyn Clock>,
        catalog: Arc<dyn AssetCatalog>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_registries(&commands, &events, &modules)?;
        Ok(Self {
            commands,
            events,
            modules,
            journal,
            clock,
            catalog,
            campaigns: Mutex::new(HashMap::new()),
        })
    }

    async fn campaign_slot(&self, campaign_id: &str) -> Arc<Mutex<CampaignSlot>> {
        let mut campaigns = self.campaigns.lock().await;
        campaigns
            .entry(campaign_id.to_string())
            .or_insert_with(|| {
                Arc::new(Mutex::new(CampaignSlot {
                    state: AggregateState::new(),
                    replayed: false,
                }))
            })
            .clone()
    }

    /// Process one command end to end.
    ///
    /// Rejections come back as `CommandOutcome::Rejected`; errors mean the
    /// pipeline itself failed and nothing past the failure point happened.
    pub async fn process(&self, command: CommandEnvelope) -> Result<CommandOutcome, PipelineError> {
        let mut command = command;
        if command.invocation_id.is_empty() {
            // Each pipeline pass is one invocation; ids are time-ordered
            command.invocation_id = crate::identifiers::EventId::new().to_string();
        }

        self.commands.validate_for_decision(&command)?;

        let slot = self.campaign_slot(&command.campaign_id).await;
        let mut slot = slot.lock().await;

        let folder = AggregateFolder::new(&self.events, &self.modules);
        if !slot.replayed {
            let journaled = self.journal.load(&command.campaign_id).await?;
            folder.fold_all(&mut slot.state, journaled.iter())?;
            slot.replayed = true;
            debug!(campaign_id = %command.campaign_id, "campaign state warmed from journal");
        }

        let ctx = DecisionContext::new(self.clock.as_ref(), self.catalog.as_ref());
        let decision = route_command(&slot.state, &command, &ctx, &self.modules);

        let events = match decision {
            Decision::Rejected(rejections) => {
                warn!(
                    campaign_id = %command.campaign_id,
                    command_type = %command.command_type,
                    code = %rejections.first().map(|r| r.code.as_str()).unwrap_or(""),
                    "command rejected"
                );
                return Ok(CommandOutcome::Rejected(rejections));
            }
            Decision::Accepted(events) => events,
        };

        for event in &events {
            self.events.validate_for_append(event)?;
        }

        let start_seq = self
            .journal
            .append(&command.campaign_id, events.clone())
            .await?;

        // Emission order is application order
        folder.fold_all(&mut slot.state, events.iter())?;

        info!(
            campaign_id = %command.campaign_id,
            command_type = %command.command_type,
            events = events.len(),
            start_seq,
            "command accepted"
        );
        Ok(CommandOutcome::Accepted { start_seq, events })
    }

    /// A point-in-time copy of one campaign's state
    pub async fn state(&self, campaign_id: &str) -> AggregateState {
        let slot = self.campaign_slot(campaign_id).await;
        let slot = slot.lock().await;
        slot.state.clone()
    }
}
