// Copyright 2025 Cowboy AI, LLC.

//! GM Fear continuity value
//!
//! Fear carries across sessions. It is gained and spent in whole points,
//! never negative, and capped at [`GM_FEAR_MAX`]. Both operations are pure;
//! persistence happens in the surrounding snapshot layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound of the fear track
pub const GM_FEAR_MAX: i64 = 12;

/// The GM Fear track of one campaign
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct GmFear {
    /// Campaign the track belongs to
    pub campaign_id: String,
    /// Current fear, `0..=GM_FEAR_MAX`
    pub value: i64,
}

impl GmFear {
    /// A zeroed track for one campaign
    pub fn new(campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            value: 0,
        }
    }
}

/// Before/after view of one fear operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GmFearChange {
    /// Fear before the operation
    pub before: i64,
    /// Fear after the operation
    pub after: i64,
}

/// Why a fear operation was refused
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GmFearError {
    /// The amount was zero or negative
    #[error("fear amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// The gain would push fear past the cap
    #[error("fear {current} + {amount} exceeds the cap of {GM_FEAR_MAX}")]
    ExceedsCap {
        /// Fear before the refused gain
        current: i64,
        /// The refused amount
        amount: i64,
    },

    /// The spend asks for more fear than is banked
    #[error("fear {current} is insufficient to spend {amount}")]
    Insufficient {
        /// Fear before the refused spend
        current: i64,
        /// The refused amount
        amount: i64,
    },
}

impl GmFearError {
    /// The stable rejection code for this error
    pub fn code(&self) -> &'static str {
        match self {
            GmFearError::InvalidAmount(_) => "INVALID_GM_FEAR",
            GmFearError::ExceedsCap { .. } => "GM_FEAR_EXCEEDS_CAP",
            GmFearError::Insufficient { .. } => "INSUFFICIENT_FEAR",
        }
    }
}

/// Gain fear, refusing to pass the cap
pub fn apply_gm_fear_gain(
    fear: &GmFear,
    amount: i64,
) -> Result<(GmFear, GmFearChange), GmFearError> {
    if amount <= 0 {
        return Err(GmFearError::InvalidAmount(amount));
    }
    let after = fear.value + amount;
    if after > GM_FEAR_MAX {
        return Err(GmFearError::ExceedsCap {
            current: fear.value,
            amount,
        });
    }
    Ok((
        GmFear {
            campaign_id: fear.campaign_id.clone(),
            value: after,
        },
        GmFearChange {
            before: fear.value,
            after,
        },
    ))
}

/// Spend fear, refusing to go negative
pub fn apply_gm_fear_spend(
    fear: &GmFear,
    amount: i64,
) -> Result<(GmFear, GmFearChange), GmFearError> {
    if amount <= 0 {
        return Err(GmFearError::InvalidAmount(amount));
    }
    if fear.value < amount {
        return Err(GmFearError::Insufficient {
            current: fear.value,
            amount,
        });
    }
    let after = fear.value - amount;
    Ok((
        GmFear {
            campaign_id: fear.campaign_id.clone(),
            value: after,
        },
        GmFearChange {
            before: fear.value,
            after,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fear(value: i64) -> GmFear {
        GmFear {
            campaign_id: "camp-1".into(),
            value,
        }
    }

    #[test]
    fn gain_and_spend_report_before_and_after() {
        let (next, change) = apply_gm_fear_gain(&fear(3), 4).unwrap();
        assert_eq!(next.value, 7);
        assert_eq!(change, GmFearChange { before: 3, after: 7 });

        let (next, change) = apply_gm_fear_spend(&next, 2).unwrap();
        assert_eq!(next.value, 5);
        assert_eq!(change, GmFearChange { before: 7, after: 5 });
    }

    #[test]
    fn gain_past_the_cap_is_refused() {
        let err = apply_gm_fear_gain(&fear(10), 3).unwrap_err();
        assert_eq!(err.code(), "GM_FEAR_EXCEEDS_CAP");
        // Gaining exactly to the cap is fine
        assert!(apply_gm_fear_gain(&fear(10), 2).is_ok());
    }

    #[test]
    fn overspending_is_refused() {
        let err = apply_gm_fear_spend(&fear(1), 3).unwrap_err();
        assert_eq!(err.code(), "INSUFFICIENT_FEAR");
    }

    #[test]
    fn non_positive_amounts_are_refused() {
        assert_eq!(
            apply_gm_fear_gain(&fear(0), 0).unwrap_err().code(),
            "INVALID_GM_FEAR"
        );
        assert_eq!(
            apply_gm_fear_spend(&fear(5), -1).unwrap_err().code(),
            "INVALID_GM_FEAR"
        );
    }

    proptest! {
        /// Any accepted gain lands inside the track's bounds
        #[test]
        fn gain_stays_in_bounds(value in 0..=GM_FEAR_MAX, amount in i64::MIN / 2..i64::MAX / 2) {
            if let Ok((next, change)) = apply_gm_fear_gain(&fear(value), amount) {
                prop_assert!(next.value >= 0);
                prop_assert!(next.value <= GM_FEAR_MAX);
                prop_assert_eq!(change.after, next.value);
                prop_assert_eq!(change.before, value);
            }
        }

        /// Any accepted spend lands inside the track's bounds
        #[test]
        fn spend_stays_in_bounds(value in 0..=GM_FEAR_MAX, amount in i64::MIN / 2..i64::MAX / 2) {
            if let Ok((next, _)) = apply_gm_fear_spend(&fear(value), amount) {
                prop_assert!(next.value >= 0);
                prop_assert!(next.value <= GM_FEAR_MAX);
            }
        }
    }
}
