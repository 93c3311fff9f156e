// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Work-item queue service (spec §4.4): per-queue FIFO pull with
//! lock-and-claim semantics, idempotent status updates, reference lookup.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreError, CoreResult, WorkItem, WorkItemId, WorkItemStatus, WorkqueueId};
use ctrlplane_storage::UnitOfWork;

use crate::config::SchedulerConfig;

/// Insert a new `WorkItem`, forcing `status=NEW, locked=false, deleted=
/// false` (spec §4.4). The workqueue must exist and not be soft-deleted.
pub fn enqueue(
    uow: &UnitOfWork,
    queue_id: WorkqueueId,
    data: serde_json::Value,
    reference: String,
    now: DateTime<Utc>,
) -> CoreResult<WorkItem> {
    let queue = uow.workqueues().get(&queue_id)?;
    if queue.deleted {
        return Err(CoreError::gone("Workqueue", queue_id.to_string()));
    }
    let item = WorkItem {
        id: ctrlplane_core::WorkItemId::new(),
        workqueue_id: queue_id,
        data,
        reference,
        locked: false,
        status: WorkItemStatus::New,
        message: String::new(),
        started_at: None,
        work_duration_seconds: None,
        created_at: now,
        deleted: false,
    };
    item.validate()?;
    Ok(uow.workitems().create(item))
}

/// Look up an active item by `reference` first (SPEC_FULL §C.4
/// idempotency aid grounded in `workitem_router.py`'s de-dup pattern);
/// enqueue only if none is found. Non-invariant sugar over §4.4, not a new
/// claim rule.
pub fn find_or_enqueue(
    uow: &UnitOfWork,
    queue_id: WorkqueueId,
    data: serde_json::Value,
    reference: String,
    now: DateTime<Utc>,
) -> CoreResult<WorkItem> {
    if !reference.trim().is_empty() {
        if let Some(existing) = uow.workitems().find_by_reference(&reference, None).into_iter().find(
            |i| i.workqueue_id == queue_id,
        ) {
            return Ok(existing);
        }
    }
    enqueue(uow, queue_id, data, reference, now)
}

/// Claim the oldest `NEW, unlocked` item in `queue_id` (spec §4.1, §4.4).
/// Disabled or missing queues never dispense items, even if non-empty.
/// Retries a contended claim up to `config.claim_retries` times with
/// `config.claim_backoff` between attempts (spec §4.1, §5, §7); a claim
/// that is still contended after exhausting retries surfaces as
/// `Contended` ("service busy" to the caller per spec §7).
pub async fn claim_next(
    uow: &UnitOfWork,
    queue_id: &WorkqueueId,
    now: DateTime<Utc>,
    config: &SchedulerConfig,
) -> CoreResult<Option<WorkItem>> {
    let queue = uow.workqueues().get(queue_id)?;
    if queue.deleted || !queue.enabled {
        return Ok(None);
    }

    let mut attempt = 0;
    loop {
        match uow.workitems().claim_next(queue_id, now) {
            Ok(item) => return Ok(item),
            Err(err) if err.is_contended() && attempt < config.claim_retries => {
                attempt += 1;
                tokio::time::sleep(config.claim_backoff).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Status update (spec §4.4): bookkeeping (lock/`started_at`/duration) is
/// handled by `WorkItem::apply_status_transition`; this layers on the
/// caller-supplied message.
pub fn update_status(
    uow: &UnitOfWork,
    item_id: &WorkItemId,
    to: WorkItemStatus,
    message: Option<String>,
    now: DateTime<Utc>,
) -> CoreResult<WorkItem> {
    uow.workitems().update(item_id, |item| {
        let _ = item.apply_status_transition(to, now);
        if let Some(message) = message {
            item.message = message;
        }
    })
}

/// Exact-match lookup by reference, optionally filtered by status, newest
/// first (spec §4.4).
pub fn find_by_reference(uow: &UnitOfWork, reference: &str, status: Option<WorkItemStatus>) -> Vec<WorkItem> {
    uow.workitems().find_by_reference(reference, status)
}

/// Delete items in `queue_id`, optionally narrowed by status and/or age
/// (AND-combined, spec §4.4).
pub fn clear(
    uow: &UnitOfWork,
    queue_id: &WorkqueueId,
    status: Option<WorkItemStatus>,
    days_older_than: Option<i64>,
    now: DateTime<Utc>,
) -> usize {
    uow.workitems().clear(queue_id, status, days_older_than, now)
}

/// Count of items in `queue_id` with the given status (spec §4.4, used by
/// the workqueue trigger processor's pending-count).
pub fn count(uow: &UnitOfWork, queue_id: &WorkqueueId, status: WorkItemStatus) -> usize {
    uow.workitems().count(queue_id, status)
}

/// All status counts for `queue_id` in one pass (SPEC_FULL §C.2,
/// grounded on `workqueue_router.py`'s `get_workitem_count` monitoring
/// surface). The trigger processor needs exactly the `New` slice; the rest
/// is free for a future metrics façade.
pub fn counts_by_status(uow: &UnitOfWork, queue_id: &WorkqueueId) -> BTreeMap<WorkItemStatus, u64> {
    const ALL: [WorkItemStatus; 5] = [
        WorkItemStatus::New,
        WorkItemStatus::InProgress,
        WorkItemStatus::Completed,
        WorkItemStatus::Failed,
        WorkItemStatus::PendingUserAction,
    ];
    ALL.iter().map(|status| (*status, uow.workitems().count(queue_id, *status) as u64)).collect()
}

#[cfg(test)]
#[path = "workqueue_service_tests.rs"]
mod tests;
