// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WorkItem entity: a unit consumed by a session (spec §3, §4.4).

use crate::error::{CoreError, CoreResult};
use crate::workqueue::WorkqueueId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a work item.
    pub struct WorkItemId("witm");
}

/// Work item lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemStatus {
    New,
    InProgress,
    Completed,
    Failed,
    PendingUserAction,
}

impl WorkItemStatus {
    /// Terminal-or-actionable statuses that clear the `locked` flag when
    /// entered (spec §3, §4.4): everything except `InProgress`.
    pub fn clears_lock(self) -> bool {
        !matches!(self, WorkItemStatus::InProgress)
    }
}

crate::simple_display! {
    WorkItemStatus {
        New => "new",
        InProgress => "in_progress",
        Completed => "completed",
        Failed => "failed",
        PendingUserAction => "pending_user_action",
    }
}

/// A single unit of input pulled by a session from a [`Workqueue`](crate::workqueue::Workqueue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    pub workqueue_id: WorkqueueId,
    /// Structured payload, opaque to the core.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Opaque user-supplied string used for idempotent lookup.
    #[serde(default)]
    pub reference: String,
    pub locked: bool,
    pub status: WorkItemStatus,
    #[serde(default)]
    pub message: String,
    pub started_at: Option<DateTime<Utc>>,
    pub work_duration_seconds: Option<i64>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
}

impl WorkItem {
    /// Apply a status transition, enforcing the lock/started_at/duration
    /// bookkeeping from spec §3 and §4.4:
    /// - entering `InProgress` sets `started_at = now` and locks the item;
    /// - leaving `InProgress` computes `work_duration_seconds` (floored)
    ///   and clears the lock.
    pub fn apply_status_transition(&mut self, to: WorkItemStatus, now: DateTime<Utc>) -> CoreResult<()> {
        let was_in_progress = self.status == WorkItemStatus::InProgress;
        if to == WorkItemStatus::InProgress {
            self.started_at = Some(now);
            self.locked = true;
        } else if was_in_progress {
            if let Some(started) = self.started_at {
                self.work_duration_seconds = Some(now.signed_duration_since(started).num_seconds().max(0));
            }
        }
        if to.clears_lock() {
            self.locked = false;
        }
        self.status = to;
        Ok(())
    }

    /// Validate a caller-supplied message length; spec leaves this
    /// unbounded but callers (claim-contention retries, audit hookups)
    /// should not accept pathological input.
    pub fn validate(&self) -> CoreResult<()> {
        if self.reference.len() > 4096 {
            return Err(CoreError::invalid("WorkItem", "reference exceeds maximum length"));
        }
        Ok(())
    }
}

crate::builder! {
    pub struct WorkItemBuilder => WorkItem {
        into {
            reference: String = "",
            message: String = "",
        }
        set {
            workqueue_id: WorkqueueId = WorkqueueId::new(),
            data: serde_json::Value = serde_json::Value::Null,
            locked: bool = false,
            status: WorkItemStatus = WorkItemStatus::New,
            started_at: Option<DateTime<Utc>> = None,
            work_duration_seconds: Option<i64> = None,
            created_at: DateTime<Utc> = Utc::now(),
            deleted: bool = false,
        }
        computed {
            id: WorkItemId = WorkItemId::new(),
        }
    }
}

#[cfg(test)]
#[path = "workitem_tests.rs"]
mod tests;
