// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreError, CoreResult, WorkItem, WorkItemId, WorkItemStatus, WorkqueueId};

soft_delete_repository!(WorkItemRepository, WorkItem, WorkItemId, workitems, "WorkItem");

impl WorkItemRepository {
    /// Claim the oldest `NEW, unlocked` item in `queue_id`, flipping it to
    /// `IN_PROGRESS` + `locked=true` (spec §4.1, §4.4).
    ///
    /// Uses `try_write` rather than blocking: a held write lock stands in
    /// for the "row is already locked" case the spec describes for a real
    /// database's skip-locked scan, and is reported the same way —
    /// `Contended`, for the caller to retry with backoff (spec §4.1, §7).
    pub fn claim_next(&self, queue_id: &WorkqueueId, now: DateTime<Utc>) -> CoreResult<Option<WorkItem>> {
        let mut guard = self
            .store
            .inner
            .try_write()
            .ok_or_else(|| CoreError::Contended(format!("workqueue {queue_id} busy")))?;

        let next_id = guard
            .workitems
            .values()
            .filter(|i| {
                i.workqueue_id == *queue_id && i.status == WorkItemStatus::New && !i.locked && !i.deleted
            })
            .min_by_key(|i| i.created_at)
            .map(|i| i.id);

        let Some(id) = next_id else {
            return Ok(None);
        };
        let Some(item) = guard.workitems.get_mut(&id) else {
            return Ok(None);
        };
        item.apply_status_transition(WorkItemStatus::InProgress, now)?;
        Ok(Some(item.clone()))
    }

    /// Exact match on `reference`, optionally filtered by `status`, newest
    /// first. An empty or whitespace-only reference returns no rows (spec
    /// §4.4).
    pub fn find_by_reference(&self, reference: &str, status: Option<WorkItemStatus>) -> Vec<WorkItem> {
        if reference.trim().is_empty() {
            return Vec::new();
        }
        let mut items: Vec<WorkItem> = self
            .store
            .inner
            .read()
            .workitems
            .values()
            .filter(|i| i.reference == reference && !i.deleted)
            .filter(|i| status.map(|s| i.status == s).unwrap_or(true))
            .cloned()
            .collect();
        items.sort_by_key(|i| std::cmp::Reverse(i.created_at));
        items
    }

    /// Delete every item in `queue_id`, optionally narrowed by `status` and
    /// "created more than `days_older_than` days ago" (AND-combined, spec
    /// §4.4). Hard-delete: work items have no further life after clearing.
    pub fn clear(
        &self,
        queue_id: &WorkqueueId,
        status: Option<WorkItemStatus>,
        days_older_than: Option<i64>,
        now: DateTime<Utc>,
    ) -> usize {
        let mut guard = self.store.inner.write();
        let cutoff = days_older_than.map(|days| now - chrono::Duration::days(days));
        let to_remove: Vec<WorkItemId> = guard
            .workitems
            .values()
            .filter(|i| i.workqueue_id == *queue_id)
            .filter(|i| status.map(|s| i.status == s).unwrap_or(true))
            .filter(|i| cutoff.map(|cutoff| i.created_at < cutoff).unwrap_or(true))
            .map(|i| i.id)
            .collect();
        let removed = to_remove.len();
        for id in to_remove {
            guard.workitems.remove(&id);
        }
        removed
    }

    /// Count of items in `queue_id` with the given status (spec §4.4).
    pub fn count(&self, queue_id: &WorkqueueId, status: WorkItemStatus) -> usize {
        self.store
            .inner
            .read()
            .workitems
            .values()
            .filter(|i| i.workqueue_id == *queue_id && i.status == status && !i.deleted)
            .count()
    }
}

#[cfg(test)]
#[path = "workitem_tests.rs"]
mod tests;
