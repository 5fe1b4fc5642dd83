// Copyright 2025 Cowboy AI, LLC.

//! Invite decider

use super::payloads::{
    ClaimInvite, CreateInvite, InviteClaimed, InviteCreated, InviteRevoked, InviteUpdated,
    RevokeInvite, UpdateInvite,
};
use super::state::InviteState;
use super::types;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{entity_types, CommandEnvelope, EventEnvelope};
use crate::identifiers::normalize_id;
use crate::labels::InviteStatus;
use std::collections::BTreeMap;

/// A non-empty invite id is required
pub const INVITE_ID_REQUIRED: &str = "INVITE_ID_REQUIRED";
/// A non-empty participant id is required
pub const PARTICIPANT_ID_REQUIRED: &str = "PARTICIPANT_ID_REQUIRED";
/// A non-empty user id is required
pub const USER_ID_REQUIRED: &str = "USER_ID_REQUIRED";
/// A non-empty JWT id is required
pub const JWT_ID_REQUIRED: &str = "JWT_ID_REQUIRED";
/// A non-empty recipient user id is required
pub const RECIPIENT_REQUIRED: &str = "RECIPIENT_REQUIRED";
/// An invite with this id already exists
pub const INVITE_ALREADY_EXISTS: &str = "INVITE_ALREADY_EXISTS";
/// No invite with this id exists
pub const INVITE_NOT_FOUND: &str = "INVITE_NOT_FOUND";
/// The invite is not pending
pub const INVITE_STATUS_INVALID: &str = "INVITE_STATUS_INVALID";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

/// Decide an invite command against the invites slice
pub fn decide(
    invites: &BTreeMap<String, InviteState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    match command.command_type.as_str() {
        types::CREATE => decide_create(invites, command, ctx),
        types::CLAIM => decide_claim(invites, command, ctx),
        types::REVOKE => decide_revoke(invites, command, ctx),
        types::UPDATE => decide_update(invites, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("invite subdomain does not handle {other}"),
        ),
    }
}

fn pending<'a>(
    invites: &'a BTreeMap<String, InviteState>,
    invite_id: &str,
) -> Result<&'a InviteState, Decision> {
    let Some(invite) = invites.get(invite_id).filter(|i| i.created) else {
        return Err(Decision::reject(
            INVITE_NOT_FOUND,
            format!("invite {invite_id} does not exist"),
        ));
    };
    if !invite.is_pending() {
        let status = invite
            .status
            .map(|s| s.canonical().to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(Decision::reject(
            INVITE_STATUS_INVALID,
            format!("invite {invite_id} is {status}, not pending"),
        ));
    }
    Ok(invite)
}

fn decide_create(
    invites: &BTreeMap<String, InviteState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: CreateInvite = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(invite_id) = normalize_id(&payload.invite_id) else {
        return Decision::reject(INVITE_ID_REQUIRED, "invite_id is required");
    };
    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    if invites.get(&invite_id).is_some_and(|i| i.created) {
        return Decision::reject(
            INVITE_ALREADY_EXISTS,
            format!("invite {invite_id} already exists"),
        );
    }
    let recipient_user_id = normalize_id(&payload.recipient_user_id).unwrap_or_default();

    match EventEnvelope::from_command(command, types::CREATED, ctx.now())
        .with_entity(entity_types::INVITE, &invite_id)
        .encode_payload(&InviteCreated {
            invite_id: invite_id.clone(),
            participant_id,
            recipient_user_id,
            status: InviteStatus::Pending,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_claim(
    invites: &BTreeMap<String, InviteState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: ClaimInvite = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(invite_id) = normalize_id(&payload.invite_id) else {
        return Decision::reject(INVITE_ID_REQUIRED, "invite_id is required");
    };
    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    let Some(user_id) = normalize_id(&payload.user_id) else {
        return Decision::reject(USER_ID_REQUIRED, "user_id is required");
    };
    let Some(jwt_id) = normalize_id(&payload.jwt_id) else {
        return Decision::reject(JWT_ID_REQUIRED, "jwt_id is required");
    };
    if let Err(rejection) = pending(invites, &invite_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::CLAIMED, ctx.now())
        .with_entity(entity_types::INVITE, &invite_id)
        .encode_payload(&InviteClaimed {
            invite_id: invite_id.clone(),
            participant_id,
            user_id,
            jwt_id,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_revoke(
    invites: &BTreeMap<String, InviteState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: RevokeInvite = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(invite_id) = normalize_id(&payload.invite_id) else {
        return Decision::reject(INVITE_ID_REQUIRED, "invite_id is required");
    };
    if let Err(rejection) = pending(invites, &invite_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::REVOKED, ctx.now())
        .with_entity(entity_types::INVITE, &invite_id)
        .encode_payload(&InviteRevoked {})
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_update(
    invites: &BTreeMap<String, InviteState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: UpdateInvite = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(invite_id) = normalize_id(&payload.invite_id) else {
        return Decision::reject(INVITE_ID_REQUIRED, "invite_id is required");
    };
    let Some(recipient_user_id) = normalize_id(&payload.recipient_user_id) else {
        return Decision::reject(RECIPIENT_REQUIRED, "recipient_user_id is required");
    };
    if let Err(rejection) = pending(invites, &invite_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::UPDATED, ctx.now())
        .with_entity(entity_types::INVITE, &invite_id)
        .encode_payload(&InviteUpdated { recipient_user_id })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}
