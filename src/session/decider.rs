// Copyright 2025 Cowboy AI, LLC.

//! Session decider

use super::payloads::{
    ClearSpotlight, GateOpened, GateResolved, OpenGate, ResolveGate, SetSpotlight, SpotlightCleared,
    SpotlightSet,
};
use super::state::SessionState;
use super::types;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{CommandEnvelope, EventEnvelope};
use crate::identifiers::normalize_id;

/// A gate is already open
pub const SESSION_GATE_ALREADY_OPEN: &str = "SESSION_GATE_ALREADY_OPEN";
/// No gate is open
pub const SESSION_GATE_NOT_OPEN: &str = "SESSION_GATE_NOT_OPEN";
/// The named gate is not the open one
pub const SESSION_GATE_MISMATCH: &str = "SESSION_GATE_MISMATCH";
/// A non-empty gate id is required
pub const GATE_ID_REQUIRED: &str = "GATE_ID_REQUIRED";
/// A non-empty gate type is required
pub const GATE_TYPE_REQUIRED: &str = "GATE_TYPE_REQUIRED";
/// A non-empty gate decision is required
pub const GATE_DECISION_REQUIRED: &str = "GATE_DECISION_REQUIRED";
/// A non-empty character id is required
pub const CHARACTER_ID_REQUIRED: &str = "CHARACTER_ID_REQUIRED";
/// No character holds the spotlight
pub const SPOTLIGHT_NOT_SET: &str = "SPOTLIGHT_NOT_SET";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

/// Decide a session command against the session slice
pub fn decide(state: &SessionState, command: &CommandEnvelope, ctx: &DecisionContext) -> Decision {
    match command.command_type.as_str() {
        types::OPEN_GATE => decide_open_gate(state, command, ctx),
        types::RESOLVE_GATE => decide_resolve_gate(state, command, ctx),
        types::SET_SPOTLIGHT => decide_set_spotlight(command, ctx),
        types::CLEAR_SPOTLIGHT => decide_clear_spotlight(state, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("session subdomain does not handle {other}"),
        ),
    }
}

fn decide_open_gate(
    state: &SessionState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: OpenGate = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(gate_id) = normalize_id(&payload.gate_id) else {
        return Decision::reject(GATE_ID_REQUIRED, "gate_id is required");
    };
    let Some(gate_type) = normalize_id(&payload.gate_type) else {
        return Decision::reject(GATE_TYPE_REQUIRED, "gate_type is required");
    };
    if state.gate_open {
        return Decision::reject(
            SESSION_GATE_ALREADY_OPEN,
            format!("gate {} is already open", state.gate_id),
        );
    }

    match EventEnvelope::from_command(command, types::GATE_OPENED, ctx.now())
        .encode_payload(&GateOpened { gate_id, gate_type })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_resolve_gate(
    state: &SessionState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: ResolveGate = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(gate_id) = normalize_id(&payload.gate_id) else {
        return Decision::reject(GATE_ID_REQUIRED, "gate_id is required");
    };
    let Some(decision) = normalize_id(&payload.decision) else {
        return Decision::reject(GATE_DECISION_REQUIRED, "decision is required");
    };
    if !state.gate_open {
        return Decision::reject(SESSION_GATE_NOT_OPEN, "no gate is open");
    }
    if state.gate_id != gate_id {
        return Decision::reject(
            SESSION_GATE_MISMATCH,
            format!("open gate is {}, not {}", state.gate_id, gate_id),
        );
    }

    match EventEnvelope::from_command(command, types::GATE_RESOLVED, ctx.now())
        .encode_payload(&GateResolved { gate_id, decision })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_set_spotlight(command: &CommandEnvelope, ctx: &DecisionContext) -> Decision {
    let payload: SetSpotlight = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    let Some(character_id) = normalize_id(&payload.character_id) else {
        return Decision::reject(CHARACTER_ID_REQUIRED, "character_id is required");
    };

    match EventEnvelope::from_command(command, types::SPOTLIGHT_SET, ctx.now())
        .encode_payload(&SpotlightSet { character_id })
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_clear_spotlight(
    state: &SessionState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    if let Err(e) = command.payload_json.decode::<ClearSpotlight>() {
        return Decision::reject("PAYLOAD_INVALID", e.to_string());
    }
    if !state.has_spotlight() {
        return Decision::reject(SPOTLIGHT_NOT_SET, "no character holds the spotlight");
    }

    match EventEnvelope::from_command(command, types::SPOTLIGHT_CLEARED, ctx.now())
        .encode_payload(&SpotlightCleared {})
    {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PassthroughAssetCatalog;
    use crate::clock::FixedClock;
    use pretty_assertions::assert_eq;

    fn decide_with(state: &SessionState, command_type: &str, payload: serde_json::Value) -> Decision {
        let clock = FixedClock::at("2025-06-01T12:00:00Z");
        let catalog = PassthroughAssetCatalog;
        let ctx = DecisionContext::new(&clock, &catalog);
        let command = CommandEnvelope::new(command_type, "camp-1")
            .encode_payload(&payload)
            .unwrap();
        decide(state, &command, &ctx)
    }

    #[test]
    fn open_gate_emits_gate_opened() {
        let decision = decide_with(
            &SessionState::default(),
            types::OPEN_GATE,
            serde_json::json!({"gate_id": " gate-1 ", "gate_type": "gm_consequence"}),
        );
        let events = decision.events();
        assert_eq!(events.len(), 1);
        let payload: GateOpened = events[0].payload_json.decode().unwrap();
        assert_eq!(payload.gate_id, "gate-1");
        assert_eq!(payload.gate_type, "gm_consequence");
    }

    #[test]
    fn open_gate_rejects_when_open() {
        let state = SessionState {
            gate_open: true,
            gate_id: "gate-1".into(),
            ..Default::default()
        };
        let decision = decide_with(
            &state,
            types::OPEN_GATE,
            serde_json::json!({"gate_id": "gate-2", "gate_type": "vote"}),
        );
        assert_eq!(decision.rejections()[0].code, SESSION_GATE_ALREADY_OPEN);
    }

    #[test]
    fn resolve_gate_requires_matching_id() {
        let state = SessionState {
            gate_open: true,
            gate_id: "gate-1".into(),
            gate_type: "gm_consequence".into(),
            ..Default::default()
        };

        let mismatch = decide_with(
            &state,
            types::RESOLVE_GATE,
            serde_json::json!({"gate_id": "gate-9", "decision": "approve"}),
        );
        assert_eq!(mismatch.rejections()[0].code, SESSION_GATE_MISMATCH);

        let ok = decide_with(
            &state,
            types::RESOLVE_GATE,
            serde_json::json!({"gate_id": "gate-1", "decision": "approve"}),
        );
        assert!(ok.is_accepted());
    }

    #[test]
    fn resolve_gate_rejects_when_closed() {
        let decision = decide_with(
            &SessionState::default(),
            types::RESOLVE_GATE,
            serde_json::json!({"gate_id": "gate-1", "decision": "approve"}),
        );
        assert_eq!(decision.rejections()[0].code, SESSION_GATE_NOT_OPEN);
    }

    #[test]
    fn spotlight_requires_character_and_presence() {
        let missing = decide_with(
            &SessionState::default(),
            types::SET_SPOTLIGHT,
            serde_json::json!({"character_id": "  "}),
        );
        assert_eq!(missing.rejections()[0].code, CHARACTER_ID_REQUIRED);

        let clear_unset = decide_with(
            &SessionState::default(),
            types::CLEAR_SPOTLIGHT,
            serde_json::json!({}),
        );
        assert_eq!(clear_unset.rejections()[0].code, SPOTLIGHT_NOT_SET);
    }
}
