// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler tuning knobs (spec §6 configuration surface, §4.2, §4.3, §4.1).
//!
//! These are the engine-internal defaults; `ctrlplane-daemon` overlays them
//! from `ctrlplane.toml` + `CTRLPLANE_*` environment variables before
//! constructing a [`crate::Scheduler`].

use chrono::Duration;

/// Tuning knobs for one scheduler instance.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    /// Tick period (spec §4.8, default 10s).
    pub interval: std::time::Duration,
    /// Sleep after an uncaught per-tick exception before retrying (spec
    /// §4.8, default 30s).
    pub error_backoff: std::time::Duration,
    /// Maximum accepted length for `Trigger.parameters` (spec §4.7 common
    /// pre-step, default 1000).
    pub max_parameter_length: usize,
    /// Heartbeat staleness threshold for the availability sweep (spec
    /// §4.2, fixed at 10 minutes).
    pub resource_stale_timeout: Duration,
    /// Age past which an `IN_PROGRESS` session on a vanished resource is
    /// force-failed (spec §4.3, fixed at 4 hours).
    pub dangling_session_timeout: Duration,
    /// Bounded retry count for a contended work-item claim (spec §4.1,
    /// fixed at 6).
    pub claim_retries: u32,
    /// Backoff between claim retries (spec §4.1, fixed at ~100ms).
    pub claim_backoff: std::time::Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval: std::time::Duration::from_secs(10),
            error_backoff: std::time::Duration::from_secs(30),
            max_parameter_length: 1000,
            resource_stale_timeout: Duration::minutes(10),
            dangling_session_timeout: Duration::hours(4),
            claim_retries: 6,
            claim_backoff: std::time::Duration::from_millis(100),
        }
    }
}
