// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger processors (spec §4.7): three strategies that turn a `Trigger`
//! into a session-creation decision. Modeled as a small closed set behind
//! one trait (spec §9 "polymorphism by tagged variant"), not an open
//! inheritance hierarchy — `TriggerKind` itself is the tag.

mod cron;
mod date;
mod workqueue;

pub use cron::CronProcessor;
pub use date::DateProcessor;
pub use workqueue::WorkqueueProcessor;

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreResult, Trigger};
use ctrlplane_storage::UnitOfWork;

use crate::config::SchedulerConfig;

/// One of the three trigger strategies (spec §4.7).
///
/// `process` returns `Ok(true)` whether or not it fired — a soft failure
/// (spec §4.8) is only `Err`, which the scheduler loop logs and continues
/// past without aborting the tick.
pub trait TriggerProcessor {
    fn process(
        &self,
        uow: &UnitOfWork,
        trigger: &Trigger,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> CoreResult<bool>;
}

/// Direct map from trigger kind to its processor (spec §9). Unknown kinds
/// cannot occur since `TriggerKind` is a closed enum; this registry exists
/// so the scheduler loop doesn't need to match on the kind itself.
#[derive(Default)]
pub struct TriggerRegistry {
    cron: CronProcessor,
    date: DateProcessor,
    workqueue: WorkqueueProcessor,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(
        &self,
        uow: &UnitOfWork,
        trigger: &Trigger,
        now: DateTime<Utc>,
        config: &SchedulerConfig,
    ) -> CoreResult<bool> {
        match &trigger.kind {
            ctrlplane_core::TriggerKind::Cron { .. } => self.cron.process(uow, trigger, now, config),
            ctrlplane_core::TriggerKind::Date { .. } => self.date.process(uow, trigger, now, config),
            ctrlplane_core::TriggerKind::Workqueue { .. } => self.workqueue.process(uow, trigger, now, config),
        }
    }
}

/// Common "firing" step (spec §4.7): create a session for the trigger's
/// process and stamp `last_triggered`. Returns whether a session was
/// actually created (a dedup no-op still counts as a successfully
/// processed trigger, per the original's `_create_session` semantics).
fn fire(
    uow: &UnitOfWork,
    trigger: &Trigger,
    parameters: String,
    force: bool,
    now: DateTime<Utc>,
) -> CoreResult<bool> {
    let created = crate::session_lifecycle::create_session(uow, trigger.process_id, force, Some(parameters), now)?;
    if created.is_some() {
        // Only stamp on an actual fire — a dedup no-op (force=false, a NEW
        // session already pending) must not block the next real fire.
        uow.triggers().stamp_triggered(&trigger.id, now)?;
    }
    Ok(true)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
