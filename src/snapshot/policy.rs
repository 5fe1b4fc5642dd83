// Copyright 2025 Cowboy AI, LLC.

//! Snapshot cadence policy
//!
//! Decides when the surrounding layer should persist a snapshot of derived
//! state. The decision is pure over the counters the caller tracks; no
//! clock is read here.

use chrono::Duration;

/// Policy configuration for automatic snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPolicy {
    /// Create snapshot after this many events
    pub event_count_threshold: Option<u32>,
    /// Create snapshot after this much time since the last one
    pub time_interval: Option<Duration>,
    /// Create snapshot after these specific event types
    pub after_events: Vec<String>,
    /// Whether this policy is active
    pub enabled: bool,
}

impl Default for SnapshotPolicy {
    fn default() -> Self {
        Self {
            event_count_threshold: Some(100),
            time_interval: Some(Duration::hours(1)),
            after_events: vec![],
            enabled: true,
        }
    }
}

impl SnapshotPolicy {
    /// A policy that never snapshots
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Should a snapshot be taken now?
    ///
    /// `events_since_snapshot` counts events folded since the last
    /// snapshot; `elapsed` is the time since it was taken, `None` when no
    /// snapshot exists yet.
    pub fn should_snapshot(
        &self,
        events_since_snapshot: u32,
        elapsed: Option<Duration>,
        event_type: &str,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        if let Some(threshold) = self.event_count_threshold {
            if events_since_snapshot >= threshold {
                return true;
            }
        }

        if let Some(interval) = self.time_interval {
            match elapsed {
                Some(elapsed) if elapsed > interval => return true,
                None => return true,
                _ => {}
            }
        }

        self.after_events.iter().any(|t| t == event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_policy_never_snapshots() {
        let policy = SnapshotPolicy::disabled();
        assert!(!policy.should_snapshot(10_000, None, "campaign.created"));
    }

    #[test]
    fn event_count_threshold_triggers() {
        let policy = SnapshotPolicy {
            event_count_threshold: Some(100),
            time_interval: None,
            after_events: vec![],
            enabled: true,
        };
        assert!(!policy.should_snapshot(99, Some(Duration::minutes(1)), "x"));
        assert!(policy.should_snapshot(100, Some(Duration::minutes(1)), "x"));
    }

    #[test]
    fn time_interval_triggers_and_first_snapshot_is_eager() {
        let policy = SnapshotPolicy {
            event_count_threshold: None,
            time_interval: Some(Duration::hours(1)),
            after_events: vec![],
            enabled: true,
        };
        assert!(policy.should_snapshot(0, None, "x"));
        assert!(!policy.should_snapshot(0, Some(Duration::minutes(30)), "x"));
        assert!(policy.should_snapshot(0, Some(Duration::minutes(61)), "x"));
    }

    #[test]
    fn listed_event_types_trigger() {
        let policy = SnapshotPolicy {
            event_count_threshold: None,
            time_interval: None,
            after_events: vec!["session.gate_resolved".to_string()],
            enabled: true,
        };
        assert!(policy.should_snapshot(1, Some(Duration::seconds(1)), "session.gate_resolved"));
        assert!(!policy.should_snapshot(1, Some(Duration::seconds(1)), "session.gate_opened"));
    }
}
