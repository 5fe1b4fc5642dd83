// Copyright 2025 Cowboy AI, LLC.

//! Session-start readiness
//!
//! A purely derived predicate over aggregate state that gates opening a
//! session. The checks run in a fixed order and iterate entity maps in
//! sorted key order, so the first failure (and its message) is the same on
//! every replica.

use crate::aggregate::AggregateState;
use crate::character::CharacterState;
use crate::decision::Rejection;
use crate::labels::ParticipantRole;

/// No active GM participant
pub const SESSION_READINESS_GM_REQUIRED: &str = "SESSION_READINESS_GM_REQUIRED";
/// No active player participant
pub const SESSION_READINESS_PLAYER_REQUIRED: &str = "SESSION_READINESS_PLAYER_REQUIRED";
/// An active character has no controlling participant
pub const CHARACTER_CONTROLLER_REQUIRED: &str = "CHARACTER_CONTROLLER_REQUIRED";
/// An active player controls no active character
pub const SESSION_READINESS_PLAYER_CHARACTER_REQUIRED: &str =
    "SESSION_READINESS_PLAYER_CHARACTER_REQUIRED";
/// An active character fails the bound system's readiness hook
pub const CHARACTER_SYSTEM_REQUIRED: &str = "CHARACTER_SYSTEM_REQUIRED";

/// Game-system veto over a character's readiness
pub trait SystemReadinessHook {
    /// Ok when the character's system profile is ready for play; the error
    /// string is appended to the rejection message.
    fn check_character(&self, character: &CharacterState) -> Result<(), String>;
}

/// Evaluate whether a session may start.
///
/// Returns the first failing check as a rejection, or `None` when the
/// campaign is ready.
pub fn evaluate_session_start(
    state: &AggregateState,
    hook: Option<&dyn SystemReadinessHook>,
) -> Option<Rejection> {
    if !state.has_active_gm() {
        return Some(Rejection::new(
            SESSION_READINESS_GM_REQUIRED,
            "campaign has no active GM",
        ));
    }

    let has_player = state
        .active_participants()
        .any(|p| p.role == Some(ParticipantRole::Player));
    if !has_player {
        return Some(Rejection::new(
            SESSION_READINESS_PLAYER_REQUIRED,
            "campaign has no active player",
        ));
    }

    // Map iteration is sorted by character id
    for character in state.active_characters() {
        if !character.has_controller() {
            return Some(Rejection::new(
                CHARACTER_CONTROLLER_REQUIRED,
                format!("character {} has no controller", character.character_id),
            ));
        }
    }

    // Map iteration is sorted by participant id
    for participant in state.active_participants() {
        if participant.role != Some(ParticipantRole::Player) {
            continue;
        }
        let controls_any = state
            .active_characters()
            .any(|c| c.participant_id == participant.participant_id);
        if !controls_any {
            return Some(Rejection::new(
                SESSION_READINESS_PLAYER_CHARACTER_REQUIRED,
                format!(
                    "player {} controls no active character",
                    participant.participant_id
                ),
            ));
        }
    }

    if let Some(hook) = hook {
        for character in state.active_characters() {
            if let Err(reason) = hook.check_character(character) {
                return Some(Rejection::new(
                    CHARACTER_SYSTEM_REQUIRED,
                    format!("character {}: {reason}", character.character_id),
                ));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::CampaignAccess;
    use crate::participant::ParticipantState;
    use pretty_assertions::assert_eq;

    fn participant(id: &str, role: ParticipantRole) -> ParticipantState {
        ParticipantState {
            joined: true,
            participant_id: id.to_string(),
            role: Some(role),
            access: Some(CampaignAccess::Member),
            ..Default::default()
        }
    }

    fn character(id: &str, controller: &str) -> CharacterState {
        CharacterState {
            created: true,
            character_id: id.to_string(),
            participant_id: controller.to_string(),
            ..Default::default()
        }
    }

    fn table() -> AggregateState {
        let mut state = AggregateState::new();
        state
            .participants
            .insert("gm-1".into(), participant("gm-1", ParticipantRole::Gm));
        state
            .participants
            .insert("player-1".into(), participant("player-1", ParticipantRole::Player));
        state
            .characters
            .insert("char-1".into(), character("char-1", "player-1"));
        state
    }

    #[test]
    fn ready_table_passes() {
        assert_eq!(evaluate_session_start(&table(), None), None);
    }

    #[test]
    fn gm_is_required_first() {
        let mut state = table();
        state.participants.remove("gm-1");
        let rejection = evaluate_session_start(&state, None).unwrap();
        assert_eq!(rejection.code, SESSION_READINESS_GM_REQUIRED);
    }

    #[test]
    fn player_is_required_second() {
        let mut state = table();
        state.participants.get_mut("player-1").unwrap().left = true;
        let rejection = evaluate_session_start(&state, None).unwrap();
        assert_eq!(rejection.code, SESSION_READINESS_PLAYER_REQUIRED);
    }

    #[test]
    fn every_active_character_needs_a_controller() {
        let mut state = table();
        state
            .characters
            .insert("char-0".into(), character("char-0", ""));
        let rejection = evaluate_session_start(&state, None).unwrap();
        assert_eq!(rejection.code, CHARACTER_CONTROLLER_REQUIRED);
        // Sorted iteration pins the failing character
        assert!(rejection.message.contains("char-0"));
    }

    #[test]
    fn deleted_characters_are_ignored() {
        let mut state = table();
        let mut orphan = character("char-0", "");
        orphan.deleted = true;
        state.characters.insert("char-0".into(), orphan);
        assert_eq!(evaluate_session_start(&state, None), None);
    }

    #[test]
    fn every_player_needs_a_character() {
        let mut state = table();
        state.characters.get_mut("char-1").unwrap().participant_id = "gm-1".into();
        let rejection = evaluate_session_start(&state, None).unwrap();
        assert_eq!(rejection.code, SESSION_READINESS_PLAYER_CHARACTER_REQUIRED);
        assert!(rejection.message.contains("player-1"));
    }

    #[test]
    fn giving_the_player_a_character_restores_readiness() {
        let mut state = table();
        state.characters.get_mut("char-1").unwrap().participant_id = "gm-1".into();
        assert!(evaluate_session_start(&state, None).is_some());

        state
            .characters
            .insert("char-2".into(), character("char-2", "player-1"));
        assert_eq!(evaluate_session_start(&state, None), None);
    }

    #[test]
    fn system_hook_can_veto_with_reason() {
        struct NeedsClass;
        impl SystemReadinessHook for NeedsClass {
            fn check_character(&self, character: &CharacterState) -> Result<(), String> {
                if character.system_profile.get("class").is_some() {
                    Ok(())
                } else {
                    Err("no class selected".to_string())
                }
            }
        }

        let state = table();
        let rejection = evaluate_session_start(&state, Some(&NeedsClass)).unwrap();
        assert_eq!(rejection.code, CHARACTER_SYSTEM_REQUIRED);
        assert_eq!(rejection.message, "character char-1: no class selected");

        let mut ready = table();
        ready.characters.get_mut("char-1").unwrap().system_profile =
            serde_json::json!({"class": "bard"});
        assert_eq!(evaluate_session_start(&ready, Some(&NeedsClass)), None);
    }
}
