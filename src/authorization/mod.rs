// Copyright 2025 Cowboy AI, LLC.

//! Campaign authorization
//!
//! Authorization answers with decisions, never errors: `(allowed, reason
//! code)`. Reason codes are stable identifiers and part of the external
//! contract. The base policy table maps `(access level, capability)` to a
//! yes/no; specialized decisions layer resource ownership and the owner
//! guards on top.

pub mod capability;
pub mod decisions;
pub mod policy;

pub use capability::{AuthzAction, AuthzResource, Capability};
pub use decisions::{
    can_character_mutation, can_participant_access_change, can_participant_removal, check_batch,
    BatchCheck, BatchDecision,
};
pub use policy::PolicyTable;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Allowed: the actor's access level grants the capability
pub const AUTHZ_ALLOW_ACCESS_LEVEL: &str = "AUTHZ_ALLOW_ACCESS_LEVEL";
/// Allowed: the actor owns the resource
pub const AUTHZ_ALLOW_RESOURCE_OWNER: &str = "AUTHZ_ALLOW_RESOURCE_OWNER";
/// Denied: a higher access level is required
pub const AUTHZ_DENY_ACCESS_LEVEL_REQUIRED: &str = "AUTHZ_DENY_ACCESS_LEVEL_REQUIRED";
/// Denied: the actor does not own the resource
pub const AUTHZ_DENY_NOT_RESOURCE_OWNER: &str = "AUTHZ_DENY_NOT_RESOURCE_OWNER";
/// Denied: the target holds owner access
pub const AUTHZ_DENY_TARGET_IS_OWNER: &str = "AUTHZ_DENY_TARGET_IS_OWNER";
/// Denied: the change would remove the final owner
pub const AUTHZ_DENY_LAST_OWNER_GUARD: &str = "AUTHZ_DENY_LAST_OWNER_GUARD";
/// Denied: managers cannot mutate owner standing
pub const AUTHZ_DENY_MANAGER_OWNER_MUTATION_FORBIDDEN: &str =
    "AUTHZ_DENY_MANAGER_OWNER_MUTATION_FORBIDDEN";

/// Outcome of one authorization question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthzDecision {
    /// Whether the action may proceed
    pub allowed: bool,
    /// Stable reason code
    pub reason_code: String,
}

impl AuthzDecision {
    /// An allow decision with its reason
    pub fn allow(reason_code: &str) -> Self {
        Self {
            allowed: true,
            reason_code: reason_code.to_string(),
        }
    }

    /// A deny decision with its reason
    pub fn deny(reason_code: &str) -> Self {
        Self {
            allowed: false,
            reason_code: reason_code.to_string(),
        }
    }
}
