// Copyright 2025 Cowboy AI, LLC.

//! Specialized authorization decisions
//!
//! These layer resource ownership and the owner guards over the base
//! policy table. Every function is pure and returns a decision, never an
//! error.

use super::capability::{AuthzAction, AuthzResource, Capability};
use super::policy::PolicyTable;
use super::{
    AuthzDecision, AUTHZ_ALLOW_ACCESS_LEVEL, AUTHZ_ALLOW_RESOURCE_OWNER,
    AUTHZ_DENY_ACCESS_LEVEL_REQUIRED, AUTHZ_DENY_LAST_OWNER_GUARD,
    AUTHZ_DENY_MANAGER_OWNER_MUTATION_FORBIDDEN, AUTHZ_DENY_NOT_RESOURCE_OWNER,
    AUTHZ_DENY_TARGET_IS_OWNER,
};
use crate::labels::CampaignAccess;

/// May the actor mutate a character?
///
/// Managers and owners always may; otherwise only the character's owning
/// participant may.
pub fn can_character_mutation(
    actor_access: CampaignAccess,
    actor_participant_id: &str,
    character_owner_participant_id: &str,
) -> AuthzDecision {
    if actor_access >= CampaignAccess::Manager {
        return AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL);
    }
    if !actor_participant_id.is_empty() && actor_participant_id == character_owner_participant_id {
        return AuthzDecision::allow(AUTHZ_ALLOW_RESOURCE_OWNER);
    }
    AuthzDecision::deny(AUTHZ_DENY_NOT_RESOURCE_OWNER)
}

/// May the actor change a participant's access level?
///
/// Managers cannot touch owner targets and cannot promote to owner.
/// Owners cannot demote the final owner.
pub fn can_participant_access_change(
    actor_access: CampaignAccess,
    target_access: CampaignAccess,
    requested_access: CampaignAccess,
    owner_count: usize,
) -> AuthzDecision {
    match actor_access {
        CampaignAccess::Member => AuthzDecision::deny(AUTHZ_DENY_ACCESS_LEVEL_REQUIRED),
        CampaignAccess::Manager => {
            if target_access == CampaignAccess::Owner
                || requested_access == CampaignAccess::Owner
            {
                AuthzDecision::deny(AUTHZ_DENY_MANAGER_OWNER_MUTATION_FORBIDDEN)
            } else {
                AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL)
            }
        }
        CampaignAccess::Owner => {
            if target_access == CampaignAccess::Owner
                && requested_access != CampaignAccess::Owner
                && owner_count == 1
            {
                AuthzDecision::deny(AUTHZ_DENY_LAST_OWNER_GUARD)
            } else {
                AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL)
            }
        }
    }
}

/// May the actor remove a participant from the campaign?
///
/// Managers cannot remove owners; nobody removes the final owner.
pub fn can_participant_removal(
    actor_access: CampaignAccess,
    target_access: CampaignAccess,
    owner_count: usize,
) -> AuthzDecision {
    match actor_access {
        CampaignAccess::Member => AuthzDecision::deny(AUTHZ_DENY_ACCESS_LEVEL_REQUIRED),
        CampaignAccess::Manager => {
            if target_access == CampaignAccess::Owner {
                AuthzDecision::deny(AUTHZ_DENY_TARGET_IS_OWNER)
            } else {
                AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL)
            }
        }
        CampaignAccess::Owner => {
            if target_access == CampaignAccess::Owner && owner_count == 1 {
                AuthzDecision::deny(AUTHZ_DENY_LAST_OWNER_GUARD)
            } else {
                AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL)
            }
        }
    }
}

/// One question inside a batch check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchCheck {
    /// Caller's correlation id for this question
    pub check_id: String,
    /// What is being attempted
    pub action: AuthzAction,
    /// What it targets
    pub resource: AuthzResource,
    /// Owning participant of the target resource, when it has one
    pub target_owner_participant_id: Option<String>,
}

/// One answer inside a batch check, correlated by `check_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchDecision {
    /// The question's correlation id, echoed back
    pub check_id: String,
    /// The decision
    pub decision: AuthzDecision,
}

/// Answer a list of capability questions, preserving `check_id`
/// correspondence and input order.
pub fn check_batch(
    actor_access: CampaignAccess,
    actor_participant_id: &str,
    checks: &[BatchCheck],
) -> Vec<BatchDecision> {
    checks
        .iter()
        .map(|check| {
            let decision = match (&check.resource, &check.target_owner_participant_id) {
                (AuthzResource::Character, Some(owner)) if check.action == AuthzAction::Mutate => {
                    can_character_mutation(actor_access, actor_participant_id, owner)
                }
                _ => PolicyTable::check(
                    actor_access,
                    Capability::new(check.action, check.resource),
                ),
            };
            BatchDecision {
                check_id: check.check_id.clone(),
                decision,
            }
        })
        .collect()
}
