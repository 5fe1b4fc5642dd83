// Copyright 2025 Cowboy AI, LLC.

//! Action decider

use super::payloads::{ApplyOutcome, OutcomeApplied, ResolveRoll, RollResolved};
use super::state::ActionState;
use super::types;
use crate::context::DecisionContext;
use crate::decision::Decision;
use crate::envelope::{CommandEnvelope, EventEnvelope};

/// A roll with this sequence is already resolved
pub const ROLL_SEQ_CONFLICT: &str = "ROLL_SEQ_CONFLICT";
/// The referenced roll is not resolved
pub const ROLL_NOT_FOUND: &str = "ROLL_NOT_FOUND";
/// An outcome with this sequence is already applied
pub const OUTCOME_ALREADY_APPLIED: &str = "OUTCOME_ALREADY_APPLIED";
/// Sequences start at one
pub const ACTION_SEQ_REQUIRED: &str = "ACTION_SEQ_REQUIRED";
/// The command type is not part of this subdomain
pub const UNSUPPORTED_COMMAND: &str = "UNSUPPORTED_COMMAND";

/// Decide an action command against the action slice
pub fn decide(state: &ActionState, command: &CommandEnvelope, ctx: &DecisionContext) -> Decision {
    match command.command_type.as_str() {
        types::RESOLVE_ROLL => decide_resolve_roll(state, command, ctx),
        types::APPLY_OUTCOME => decide_apply_outcome(state, command, ctx),
        other => Decision::reject(
            UNSUPPORTED_COMMAND,
            format!("action subdomain does not handle {other}"),
        ),
    }
}

fn decide_resolve_roll(
    state: &ActionState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: ResolveRoll = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    if payload.seq == 0 {
        return Decision::reject(ACTION_SEQ_REQUIRED, "roll seq must be positive");
    }
    if state.has_roll(payload.seq) {
        return Decision::reject(
            ROLL_SEQ_CONFLICT,
            format!("roll {} is already resolved", payload.seq),
        );
    }

    match EventEnvelope::from_command(command, types::ROLL_RESOLVED, ctx.now()).encode_payload(
        &RollResolved {
            seq: payload.seq,
            outcome: payload.outcome,
        },
    ) {
        Ok(event) => Decision::accept(event),
        Err(e) => Decision::reject("PAYLOAD_INVALID", e.to_string()),
    }
}

fn decide_apply_outcome(
    state: &ActionState,
    command: &CommandEnvelope,
    ctx: &DecisionContext,
) -> Decision {
    let payload: ApplyOutcome = match command.payload_json.decode() {
        Ok(p) => p,
        Err(e) => return Decision::reject("PAYLOAD_INVALID", e.to_string()),
    };

    if payload.seq == 0 {
        return Decision::reject(ACTION_SEQ_REQUIRED, "outcome seq must be positive");
    }
    if !state.has_roll(payload.roll_seq) {
        return Decision::reject(
            ROLL_NOT_FOUND,
            format!("roll {} is not resolved", payload.roll_seq),
        );
    }
    if state.has_applied_outcome(payload.seq) {
        return Decision::reject(
            OUTCOME_ALREADY_APPLIED,
            format!("outcome {} is already applied", payload.seq),
        );
    }

    match EventEnvelope::from_command(command, types::OUTCOME_APPLIED, ctx.now()).encode_payload(
        &OutcomeApplied {
            seq: payload.seq,
            roll_seq: payload.roll_seq,
            effect: payload.effect,
        },
    ) {
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

    fn decide_with(state: &ActionState, command_type: &str, payload: serde_json::Value) -> Decision {
        let clock = FixedClock::at("2025-06-01T12:00:00Z");
        let catalog = PassthroughAssetCatalog;
        let ctx = DecisionContext::new(&clock, &catalog);
        let command = CommandEnvelope::new(command_type, "camp-1")
            .with_session("sess-1")
            .with_request("req-1", "inv-1")
            .encode_payload(&payload)
            .unwrap();
        decide(state, &command, &ctx)
    }

    fn state_with_roll(seq: u64) -> ActionState {
        let mut state = ActionState::default();
        state.rolls.insert(
            seq,
            super::super::state::RollRecord {
                request_id: "req-0".into(),
                session_id: "sess-1".into(),
                outcome: serde_json::json!({"total": 11}),
            },
        );
        state
    }

    #[test]
    fn resolve_roll_accepts_fresh_sequence() {
        let decision = decide_with(
            &ActionState::default(),
            types::RESOLVE_ROLL,
            serde_json::json!({"seq": 1, "outcome": {"total": 11}}),
        );
        assert!(decision.is_accepted());
        let payload: RollResolved = decision.events()[0].payload_json.decode().unwrap();
        assert_eq!(payload.seq, 1);
    }

    #[test]
    fn resolve_roll_rejects_duplicate_sequence() {
        let decision = decide_with(
            &state_with_roll(1),
            types::RESOLVE_ROLL,
            serde_json::json!({"seq": 1, "outcome": {"total": 4}}),
        );
        assert_eq!(decision.rejections()[0].code, ROLL_SEQ_CONFLICT);
    }

    #[test]
    fn apply_outcome_requires_resolved_roll() {
        let decision = decide_with(
            &ActionState::default(),
            types::APPLY_OUTCOME,
            serde_json::json!({"seq": 1, "roll_seq": 9}),
        );
        assert_eq!(decision.rejections()[0].code, ROLL_NOT_FOUND);
    }

    #[test]
    fn apply_outcome_rejects_double_application() {
        let mut state = state_with_roll(1);
        state.applied_outcomes.insert(
            2,
            super::super::state::AppliedOutcome {
                roll_seq: 1,
                effect: serde_json::Value::Null,
            },
        );
        let decision = decide_with(
            &state,
            types::APPLY_OUTCOME,
            serde_json::json!({"seq": 2, "roll_seq": 1}),
        );
        assert_eq!(decision.rejections()[0].code, OUTCOME_ALREADY_APPLIED);
    }

    #[test]
    fn zero_sequences_are_rejected() {
        let decision = decide_with(
            &ActionState::default(),
            types::RESOLVE_ROLL,
            serde_json::json!({"seq": 0, "outcome": {}}),
        );
        assert_eq!(decision.rejections()[0].code, ACTION_SEQ_REQUIRED);
    }
}
