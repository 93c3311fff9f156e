// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Date trigger processor (spec §4.7.2): one-shot, fires once `now` has
//! reached the configured date, then retires itself.

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreError, CoreResult, Trigger, TriggerKind};
use ctrlplane_storage::UnitOfWork;

use super::fire;
use crate::config::SchedulerConfig;

#[derive(Default)]
pub struct DateProcessor;

impl super::TriggerProcessor for DateProcessor {
    fn process(
        &self,
        uow: &UnitOfWork,
        trigger: &Trigger,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> CoreResult<bool> {
        let TriggerKind::Date { date } = &trigger.kind else {
            return Err(CoreError::invalid("Trigger", "date processor given a non-date trigger"));
        };
        if *date > now {
            return Ok(true);
        }
        let parameters = trigger.validate_parameters(config.max_parameter_length)?;
        let fired = fire(uow, trigger, parameters, false, now)?;
        uow.triggers().retire_one_shot(&trigger.id)?;
        Ok(fired)
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
