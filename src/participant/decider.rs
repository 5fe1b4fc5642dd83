// Copyright 2025 Cowboy AI, LLC.

//! Participant decider

use super::payloads::{
    BindUser, JoinParticipant, LeaveParticipant, ParticipantJoined, ParticipantLeft,
    ParticipantUpdated, ReassignSeat, SeatReassigned, UnbindUser, UpdateParticipant, UserBound,
    UserUnbound,
};
use super::state::ParticipantState;
use super::types;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{entity_types, CommandEnvelope, EventEnvelope};
use crate::identifiers::{normalize_id, normalize_optional_id};
use crate::labels::{CampaignAccess, ControllerKind, ParticipantRole};
use std::collections::BTreeMap;

/// A non-empty participant id is required
pub const PARTICIPANT_ID_REQUIRED: &str = "PARTICIPANT_ID_REQUIRED";
/// A non-empty participant name is required
pub const PARTICIPANT_NAME_REQUIRED: &str = "PARTICIPANT_NAME_REQUIRED";
/// The role label did not parse
pub const PARTICIPANT_ROLE_INVALID: &str = "PARTICIPANT_ROLE_INVALID";
/// The access label did not parse
pub const PARTICIPANT_ACCESS_INVALID: &str = "PARTICIPANT_ACCESS_INVALID";
/// The controller label did not parse
pub const PARTICIPANT_CONTROLLER_INVALID: &str = "PARTICIPANT_CONTROLLER_INVALID";
/// The participant already holds a seat
pub const PARTICIPANT_ALREADY_JOINED: &str = "PARTICIPANT_ALREADY_JOINED";
/// The participant left and cannot return to this seat
pub const PARTICIPANT_ALREADY_LEFT: &str = "PARTICIPANT_ALREADY_LEFT";
/// The participant is not active
pub const PARTICIPANT_NOT_ACTIVE: &str = "PARTICIPANT_NOT_ACTIVE";
/// An update must change at least one field
pub const UPDATE_FIELDS_REQUIRED: &str = "UPDATE_FIELDS_REQUIRED";
/// A non-empty user id is required
pub const USER_ID_REQUIRED: &str = "USER_ID_REQUIRED";
/// The supplied user does not match the bound user
pub const USER_ID_MISMATCH: &str = "USER_ID_MISMATCH";
/// The seat is already bound to a user
pub const USER_ALREADY_BOUND: &str = "USER_ALREADY_BOUND";
/// The seat has no bound user
pub const USER_NOT_BOUND: &str = "USER_NOT_BOUND";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

/// Decide a participant command against the participants slice
pub fn decide(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    match command.command_type.as_str() {
        types::JOIN => decide_join(participants, command, ctx),
        types::UPDATE => decide_update(participants, command, ctx),
        types::LEAVE => decide_leave(participants, command, ctx),
        types::BIND => decide_bind(participants, command, ctx),
        types::UNBIND => decide_unbind(participants, command, ctx),
        types::REASSIGN_SEAT => decide_reassign_seat(participants, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("participant subdomain does not handle {other}"),
        ),
    }
}

fn active<'a>(
    participants: &'a BTreeMap<String, ParticipantState>,
    participant_id: &str,
) -> Result<&'a ParticipantState, Decision> {
    match participants.get(participant_id) {
        Some(p) if p.is_active() => Ok(p),
        _ => Err(Decision::reject(
            PARTICIPANT_NOT_ACTIVE,
            format!("participant {participant_id} is not active"),
        )),
    }
}

fn decide_join(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: JoinParticipant = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    let Some(name) = normalize_id(&payload.name) else {
        return Decision::reject(PARTICIPANT_NAME_REQUIRED, "participant name is required");
    };
    let role = match ParticipantRole::parse_label(&payload.role) {
        Ok(role) => role,
        Err(e) => return Decision::reject(PARTICIPANT_ROLE_INVALID, e.to_string()),
    };
    let access = if payload.access.trim().is_empty() {
        CampaignAccess::Member
    } else {
        match CampaignAccess::parse_label(&payload.access) {
            Ok(access) => access,
            Err(e) => return Decision::reject(PARTICIPANT_ACCESS_INVALID, e.to_string()),
        }
    };
    let controller = if payload.controller.trim().is_empty() {
        ControllerKind::Human
    } else {
        match ControllerKind::parse_label(&payload.controller) {
            Ok(controller) => controller,
            Err(e) => return Decision::reject(PARTICIPANT_CONTROLLER_INVALID, e.to_string()),
        }
    };

    if let Some(existing) = participants.get(&participant_id) {
        if existing.is_active() {
            return Decision::reject(
                PARTICIPANT_ALREADY_JOINED,
                format!("participant {participant_id} already joined"),
            );
        }
        if existing.left {
            return Decision::reject(
                PARTICIPANT_ALREADY_LEFT,
                format!("participant {participant_id} left and cannot rejoin this seat"),
            );
        }
    }

    match EventEnvelope::from_command(command, types::JOINED, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&ParticipantJoined {
            participant_id: participant_id.clone(),
            name,
            role,
            access,
            controller,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_update(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: UpdateParticipant = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    if let Err(rejection) = active(participants, &participant_id) {
        return rejection;
    }

    if payload.name.is_none() && payload.role.is_none() && payload.controller.is_none() {
        return Decision::reject(UPDATE_FIELDS_REQUIRED, "update changes nothing");
    }

    let name = match payload.name.as_deref() {
        None => None,
        Some(raw) => match normalize_id(raw) {
            Some(name) => Some(name),
            None => {
                return Decision::reject(PARTICIPANT_NAME_REQUIRED, "participant name is required")
            }
        },
    };
    let role = match payload.role.as_deref() {
        None => None,
        Some(raw) => match ParticipantRole::parse_label(raw) {
            Ok(role) => Some(role),
            Err(e) => return Decision::reject(PARTICIPANT_ROLE_INVALID, e.to_string()),
        },
    };
    let controller = match payload.controller.as_deref() {
        None => None,
        Some(raw) => match ControllerKind::parse_label(raw) {
            Ok(controller) => Some(controller),
            Err(e) => return Decision::reject(PARTICIPANT_CONTROLLER_INVALID, e.to_string()),
        },
    };

    match EventEnvelope::from_command(command, types::UPDATED, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&ParticipantUpdated {
            name,
            role,
            controller,
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_leave(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: LeaveParticipant = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    if let Err(rejection) = active(participants, &participant_id) {
        return rejection;
    }

    match EventEnvelope::from_command(command, types::LEFT, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&ParticipantLeft {})
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_bind(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: BindUser = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    let Some(user_id) = normalize_id(&payload.user_id) else {
        return Decision::reject(USER_ID_REQUIRED, "user_id is required");
    };
    let participant = match active(participants, &participant_id) {
        Ok(p) => p,
        Err(rejection) => return rejection,
    };
    if participant.is_bound() {
        return Decision::reject(
            USER_ALREADY_BOUND,
            format!("participant {participant_id} is already bound to a user"),
        );
    }

    match EventEnvelope::from_command(command, types::USER_BOUND, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&UserBound { user_id })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_unbind(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: UnbindUser = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    let participant = match active(participants, &participant_id) {
        Ok(p) => p,
        Err(rejection) => return rejection,
    };
    if !participant.is_bound() {
        return Decision::reject(
            USER_NOT_BOUND,
            format!("participant {participant_id} has no bound user"),
        );
    }
    if let Some(supplied) = normalize_optional_id(payload.user_id.as_deref()) {
        if supplied != participant.user_id {
            return Decision::reject(
                USER_ID_MISMATCH,
                format!("bound user is not {supplied}"),
            );
        }
    }

    match EventEnvelope::from_command(command, types::USER_UNBOUND, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&UserUnbound {
            user_id: participant.user_id.clone(),
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_reassign_seat(
    participants: &BTreeMap<String, ParticipantState>,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: ReassignSeat = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(participant_id) = normalize_id(&payload.participant_id) else {
        return Decision::reject(PARTICIPANT_ID_REQUIRED, "participant_id is required");
    };
    let Some(user_id) = normalize_id(&payload.user_id) else {
        return Decision::reject(USER_ID_REQUIRED, "user_id is required");
    };
    let participant = match active(participants, &participant_id) {
        Ok(p) => p,
        Err(rejection) => return rejection,
    };
    if let Some(prior) = normalize_optional_id(payload.prior_user_id.as_deref()) {
        if prior != participant.user_id {
            return Decision::reject(
                USER_ID_MISMATCH,
                format!("seat is not held by {prior}"),
            );
        }
    }

    match EventEnvelope::from_command(command, types::SEAT_REASSIGNED, ctx.now())
        .with_entity(entity_types::PARTICIPANT, &participant_id)
        .encode_payload(&SeatReassigned {
            user_id,
            prior_user_id: participant.user_id.clone(),
        }) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}
