// Copyright 2025 Cowboy AI, LLC.

//! Campaign decider

use super::payloads::{
    BindSystem, CampaignCreated, CampaignRenamed, CreateCampaign, RenameCampaign, SystemBound,
};
use super::state::CampaignState;
use super::types;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{CommandEnvelope, EventEnvelope};
use crate::identifiers::normalize_id;

/// The campaign already exists
pub const CAMPAIGN_ALREADY_CREATED: &str = "CAMPAIGN_ALREADY_CREATED";
/// The campaign has not been created yet
pub const CAMPAIGN_NOT_CREATED: &str = "CAMPAIGN_NOT_CREATED";
/// A non-empty campaign name is required
pub const CAMPAIGN_NAME_REQUIRED: &str = "CAMPAIGN_NAME_REQUIRED";
/// A non-empty system id is required
pub const SYSTEM_ID_REQUIRED: &str = "SYSTEM_ID_REQUIRED";
/// A non-empty system version is required
pub const SYSTEM_VERSION_REQUIRED: &str = "SYSTEM_VERSION_REQUIRED";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

const DEFAULT_GM_MODE: &str = "human";

/// Decide a campaign command against the campaign slice
pub fn decide(state: &CampaignState, command: &CommandEnvelope, ctx: &DecisionContext) -> Decision {
    match command.command_type.as_str() {
        types::CREATE => decide_create(state, command, ctx),
        types::RENAME => decide_rename(state, command, ctx),
        types::BIND_SYSTEM => decide_bind_system(state, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("campaign subdomain does not handle {other}"),
        ),
    }
}

fn decide_create(
    state: &CampaignState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: CreateCampaign = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    if state.is_created() {
        return Decision::reject(
            CAMPAIGN_ALREADY_CREATED,
            format!("campaign {} already exists", command.campaign_id),
        );
    }
    let Some(name) = normalize_id(&payload.name) else {
        return Decision::reject(CAMPAIGN_NAME_REQUIRED, "campaign name is required");
    };

    let gm_mode = match normalize_id(&payload.gm_mode) {
        Some(mode) => mode.to_ascii_lowercase(),
        None => DEFAULT_GM_MODE.to_string(),
    };

    let system_id = normalize_id(&payload.system_id);
    let system_version = normalize_id(&payload.system_version);
    match (&system_id, &system_version) {
        (Some(_), None) => {
            return Decision::reject(
                SYSTEM_VERSION_REQUIRED,
                "system_version is required when system_id is set",
            )
        }
        (None, Some(_)) => {
            return Decision::reject(
                SYSTEM_ID_REQUIRED,
                "system_id is required when system_version is set",
            )
        }
        _ => {}
    }

    let created = match EventEnvelope::from_command(command, types::CREATED, ctx.now())
        .encode_payload(&CampaignCreated {
            name,
            gm_mode,
            status: "active".to_string(),
        }) {
        Ok(event) => event,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let mut events = vec![created];
    if let (Some(system_id), Some(system_version)) = (system_id, system_version) {
        match EventEnvelope::from_command(command, types::SYSTEM_BOUND, ctx.now()).encode_payload(
            &SystemBound {
                system_id,
                system_version,
            },
        ) {
            Ok(event) => events.push(event),
            Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
        }
    }
    Decision::accept_all(events)
}

fn decide_rename(
    state: &CampaignState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: RenameCampaign = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    if !state.is_created() {
        return Decision::reject(
            CAMPAIGN_NOT_CREATED,
            format!("campaign {} does not exist", command.campaign_id),
        );
    }
    let Some(name) = normalize_id(&payload.name) else {
        return Decision::reject(CAMPAIGN_NAME_REQUIRED, "campaign name is required");
    };

    match EventEnvelope::from_command(command, types::RENAMED, ctx.now())
        .encode_payload(&CampaignRenamed { name })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_bind_system(
    state: &CampaignState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: BindSystem = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    if !state.is_created() {
        return Decision::reject(
            CAMPAIGN_NOT_CREATED,
            format!("campaign {} does not exist", command.campaign_id),
        );
    }
    let Some(system_id) = normalize_id(&payload.system_id) else {
        return Decision::reject(SYSTEM_ID_REQUIRED, "system_id is required");
    };
    let Some(system_version) = normalize_id(&payload.system_version) else {
        return Decision::reject(SYSTEM_VERSION_REQUIRED, "system_version is required");
    };

    match EventEnvelope::from_command(command, types::SYSTEM_BOUND, ctx.now()).encode_payload(
        &SystemBound {
            system_id,
            system_version,
        },
    ) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}
