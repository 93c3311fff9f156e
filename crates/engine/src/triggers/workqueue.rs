// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workqueue trigger processor (spec §4.7.3): scales session count to
//! queue backlog, one session per tick per trigger (spec §9 fairness
//! rule). Grounded on
//! `original_source/backend/app/scheduler/trigger_processors/workqueue.py`.

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreError, CoreResult, Trigger, TriggerKind, WorkItemStatus};
use ctrlplane_storage::UnitOfWork;

use super::fire;
use crate::config::SchedulerConfig;
use crate::matcher::find_best_resource;

#[derive(Default)]
pub struct WorkqueueProcessor;

impl super::TriggerProcessor for WorkqueueProcessor {
    fn process(
        &self,
        uow: &UnitOfWork,
        trigger: &Trigger,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> CoreResult<bool> {
        let TriggerKind::Workqueue { workqueue_id, scale_up_threshold, resource_limit } = &trigger.kind
        else {
            return Err(CoreError::invalid("Trigger", "workqueue processor given a non-workqueue trigger"));
        };
        let parameters = trigger.validate_parameters(config.max_parameter_length)?;

        let Ok(queue) = uow.workqueues().get(workqueue_id) else {
            return Ok(true);
        };
        if queue.deleted || !queue.enabled {
            return Ok(true);
        }

        let pending = crate::workqueue_service::count(uow, workqueue_id, WorkItemStatus::New);
        if pending == 0 {
            return Ok(true);
        }

        let threshold = (*scale_up_threshold).max(1) as usize;
        let required = (pending / threshold).max(1).min(*resource_limit as usize);
        let active = uow.sessions().get_active_sessions_for_process(&trigger.process_id).len();
        if active >= required {
            return Ok(true);
        }

        let Ok(process) = uow.processes().get(&trigger.process_id) else {
            return Ok(true);
        };
        let requirements = process.requirement_set();
        let available = uow.resources().get_available_resources();
        if find_best_resource(&requirements, &available).is_none() {
            return Ok(true);
        }

        // Only one session per tick, to give other triggers sharing the
        // resource pool a chance to scale too (spec §9).
        fire(uow, trigger, parameters, true, now)
    }
}

#[cfg(test)]
#[path = "workqueue_tests.rs"]
mod tests;
