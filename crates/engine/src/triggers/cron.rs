// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cron trigger processor (spec §4.7.1). Grounded on
//! `original_source/backend/app/scheduler/trigger_processors/cron.py`:
//! compute the next occurrence starting one minute before `now`, fire if
//! it lands in `now`'s minute.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use cron::Schedule;
use ctrlplane_core::{CoreError, CoreResult, Trigger, TriggerKind};
use ctrlplane_storage::UnitOfWork;

use super::fire;
use crate::config::SchedulerConfig;

#[derive(Default)]
pub struct CronProcessor;

impl super::TriggerProcessor for CronProcessor {
    fn process(
        &self,
        uow: &UnitOfWork,
        trigger: &Trigger,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> CoreResult<bool> {
        let TriggerKind::Cron { cron } = &trigger.kind else {
            return Err(CoreError::invalid("Trigger", "cron processor given a non-cron trigger"));
        };
        if cron.trim().is_empty() {
            return Err(CoreError::invalid("Trigger", "cron expression is empty"));
        }
        let parameters = trigger.validate_parameters(config.max_parameter_length)?;

        // Once-per-minute guard (spec §4.7.1, §8): never fire twice within
        // the same wall-clock minute, guarded against before doing the
        // (slightly more expensive) schedule evaluation.
        if trigger.already_fired_this_minute(now) {
            return Ok(true);
        }

        let schedule = Schedule::from_str(&six_field(cron))
            .map_err(|e| CoreError::invalid("Trigger", format!("invalid cron expression: {e}")))?;

        let current_minute = ctrlplane_core::trigger::truncate_to_minute(now);
        let start = current_minute - chrono::Duration::minutes(1);
        let Some(next) = schedule.after(&start).next() else {
            // No match within the schedule's lookahead window — not a
            // processing failure, just nothing to do this minute.
            return Ok(true);
        };

        if ctrlplane_core::trigger::truncate_to_minute(next) == current_minute {
            fire(uow, trigger, parameters, false, now)
        } else {
            Ok(true)
        }
    }
}

/// The `cron` crate requires a leading seconds field; spec.md's examples
/// use standard 5-field unix cron (`"*/5 * * * *"`). Prepend `"0 "` when
/// the expression has exactly 5 whitespace-separated fields so both forms
/// are accepted.
fn six_field(expr: &str) -> String {
    if expr.split_whitespace().count() == 5 {
        format!("0 {expr}")
    } else {
        expr.to_string()
    }
}

#[cfg(test)]
#[path = "cron_tests.rs"]
mod tests;
