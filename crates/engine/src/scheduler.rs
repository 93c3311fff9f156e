// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler loop (spec §4.8, §5): the single tick that ties the rest of
//! the engine together, run on a fixed interval until cancelled. Grounded
//! on `original_source/backend/app/scheduler/scheduler.py`'s tick order.

use ctrlplane_core::{Clock, CoreResult};
use ctrlplane_storage::{Store, UnitOfWork};
use tokio_util::sync::CancellationToken;

use crate::config::SchedulerConfig;
use crate::triggers::TriggerRegistry;

/// Owns the store handle, clock, and trigger registry needed to run ticks.
/// Generic over `C: Clock` so tests can drive it with a [`ctrlplane_core::FakeClock`].
pub struct Scheduler<C: Clock> {
    store: Store,
    clock: C,
    config: SchedulerConfig,
    triggers: TriggerRegistry,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(store: Store, clock: C, config: SchedulerConfig) -> Self {
        Self { store, clock, config, triggers: TriggerRegistry::new() }
    }

    /// Run one tick (spec §4.8): reschedule orphans, flush dangling
    /// sessions, dispatch, evaluate triggers, dispatch again, all inside
    /// one unit of work committed at the end. A per-trigger `Err` is a soft
    /// failure (spec §4.8): logged and skipped, not propagated — only a
    /// failure in the surrounding steps aborts (and rolls back) the tick.
    pub fn tick(&self) -> CoreResult<()> {
        let now = self.clock.now();
        let uow = UnitOfWork::begin(self.store.clone());
        uow.run(|uow| -> CoreResult<()> {
            crate::session_lifecycle::reschedule_orphaned_sessions(uow)?;
            crate::session_lifecycle::flush_dangling_sessions(uow, now, self.config.dangling_session_timeout)?;
            crate::dispatcher::dispatch_once(uow, now, self.config.resource_stale_timeout)?;

            for trigger in uow.triggers().get_all(false) {
                if !trigger.enabled {
                    continue;
                }
                // spec §4.7: only triggers whose process still exists and
                // isn't soft-deleted are evaluated.
                match uow.processes().get(&trigger.process_id) {
                    Ok(process) if !process.deleted => {}
                    _ => continue,
                }
                if let Err(err) = self.triggers.process(uow, &trigger, now, &self.config) {
                    tracing::warn!(trigger_id = %trigger.id, error = %err, "trigger processing failed, skipping");
                }
            }

            crate::dispatcher::dispatch_once(uow, now, self.config.resource_stale_timeout)?;
            Ok(())
        })
    }

    /// Run ticks on `config.interval` until `cancel` fires (spec §5). A
    /// tick that errors out sleeps `config.error_backoff` before retrying
    /// rather than busy-looping on a sticky failure.
    pub async fn run_loop(&self, cancel: CancellationToken) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("scheduler loop cancelled, shutting down");
                    return;
                }
                _ = tokio::time::sleep(self.config.interval) => {
                    if let Err(err) = self.tick() {
                        tracing::error!(error = %err, "scheduler tick failed");
                        tokio::select! {
                            _ = cancel.cancelled() => return,
                            _ = tokio::time::sleep(self.config.error_backoff) => {}
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
