// Copyright 2025 Cowboy AI, LLC.

//! The base policy table
//!
//! Maps `(access level, capability)` to allowed/denied. Owners hold every
//! capability; managers hold everything except campaign administration;
//! members read. Resource-ownership overrides live in
//! [`decisions`](super::decisions), not here.

use super::capability::{AuthzAction, AuthzResource, Capability};
use super::{AuthzDecision, AUTHZ_ALLOW_ACCESS_LEVEL, AUTHZ_DENY_ACCESS_LEVEL_REQUIRED};
use crate::labels::CampaignAccess;

/// The campaign policy table
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyTable;

impl PolicyTable {
    /// Whether the access level grants the capability, table only
    pub fn allows(access: CampaignAccess, capability: Capability) -> bool {
        match access {
            CampaignAccess::Owner => true,
            CampaignAccess::Manager => !matches!(
                capability,
                Capability {
                    action: AuthzAction::Manage,
                    resource: AuthzResource::Campaign,
                }
            ),
            CampaignAccess::Member => capability.action == AuthzAction::Read,
        }
    }

    /// Decide a capability check with a stable reason code
    pub fn check(access: CampaignAccess, capability: Capability) -> AuthzDecision {
        if Self::allows(access, capability) {
            AuthzDecision::allow(AUTHZ_ALLOW_ACCESS_LEVEL)
        } else {
            AuthzDecision::deny(AUTHZ_DENY_ACCESS_LEVEL_REQUIRED)
        }
    }
}
