// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreError, CoreResult, Trigger, TriggerId};

soft_delete_repository!(TriggerRepository, Trigger, TriggerId, triggers, "Trigger");

impl TriggerRepository {
    /// Stamp `last_triggered = now` (spec §4.7.1, §4.7 common "firing"
    /// step). Done as its own method so callers can compose it with session
    /// creation inside the same unit of work (spec §9: the guard should be
    /// crash-safe, persisted in the transaction that creates the session).
    pub fn stamp_triggered(&self, id: &TriggerId, now: DateTime<Utc>) -> CoreResult<Trigger> {
        let mut guard = self.store.inner.write();
        let trigger = guard
            .triggers
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("Trigger", id.to_string()))?;
        trigger.last_triggered = Some(now);
        Ok(trigger.clone())
    }

    /// One-shot completion for a DATE trigger: disable and soft-delete in
    /// one step (spec §4.7.2).
    pub fn retire_one_shot(&self, id: &TriggerId) -> CoreResult<Trigger> {
        let mut guard = self.store.inner.write();
        let trigger = guard
            .triggers
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("Trigger", id.to_string()))?;
        trigger.enabled = false;
        trigger.deleted = true;
        Ok(trigger.clone())
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
