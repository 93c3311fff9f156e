// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger entity: the scheduling rule for a process (spec §3, §4.7).

use crate::error::{CoreError, CoreResult};
use crate::process::ProcessId;
use crate::workqueue::WorkqueueId;
use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a trigger.
    pub struct TriggerId("trig");
}

/// Trigger kind, carrying only the fields relevant to that kind.
///
/// The type-shape invariants from spec §3 are enforced by construction:
/// each variant only has the fields its kind needs, so a `Cron` trigger
/// simply cannot carry a `date` or `workqueue_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerKind {
    Cron { cron: String },
    Date { date: DateTime<Utc> },
    Workqueue { workqueue_id: WorkqueueId, scale_up_threshold: u32, resource_limit: u32 },
}

impl TriggerKind {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerKind::Cron { .. } => "cron",
            TriggerKind::Date { .. } => "date",
            TriggerKind::Workqueue { .. } => "workqueue",
        }
    }
}

/// The scheduling rule for a [`Process`](crate::process::Process).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: TriggerId,
    pub process_id: ProcessId,
    pub kind: TriggerKind,
    /// Opaque string forwarded to sessions this trigger creates.
    #[serde(default)]
    pub parameters: String,
    pub enabled: bool,
    #[serde(default)]
    pub deleted: bool,
    pub last_triggered: Option<DateTime<Utc>>,
}

impl Trigger {
    /// Validate `parameters` against the configured maximum length
    /// (spec §4.7 common pre-step). Returns the trimmed parameters on
    /// success, matching the idempotence law in spec §8
    /// (`validate(P) = P.trim()` for any `P` within bounds).
    pub fn validate_parameters(&self, max_len: usize) -> CoreResult<String> {
        if self.parameters.len() > max_len {
            return Err(CoreError::invalid(
                "Trigger",
                format!("parameters exceed maximum length of {max_len}"),
            ));
        }
        Ok(self.parameters.trim().to_string())
    }

    /// The once-per-minute guard (spec §4.7.1, §8): a cron trigger fires at
    /// most once within a given wall-clock minute. Compares `last_triggered`
    /// truncated to minute precision against `now` truncated the same way.
    pub fn already_fired_this_minute(&self, now: DateTime<Utc>) -> bool {
        match self.last_triggered {
            Some(last) => truncate_to_minute(last) == truncate_to_minute(now),
            None => false,
        }
    }
}

pub fn truncate_to_minute(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_opt(at.time().hour(), at.time().minute(), 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(at)
}

crate::builder! {
    pub struct TriggerBuilder => Trigger {
        into {
            parameters: String = "",
        }
        set {
            process_id: ProcessId = ProcessId::new(),
            kind: TriggerKind = TriggerKind::Cron { cron: "*/5 * * * *".to_string() },
            enabled: bool = true,
            deleted: bool = false,
            last_triggered: Option<DateTime<Utc>> = None,
        }
        computed {
            id: TriggerId = TriggerId::new(),
        }
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
