// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::Duration;

#[test]
fn entering_in_progress_sets_started_at_and_locks() {
    let mut item = WorkItem::builder().status(WorkItemStatus::New).build();
    let now = Utc::now();
    item.apply_status_transition(WorkItemStatus::InProgress, now).unwrap();
    assert_eq!(item.started_at, Some(now));
    assert!(item.locked);
}

#[test]
fn leaving_in_progress_computes_duration_and_unlocks() {
    let started = Utc::now();
    let mut item = WorkItem::builder()
        .status(WorkItemStatus::InProgress)
        .started_at(Some(started))
        .locked(true)
        .build();
    let finished = started + Duration::seconds(42);
    item.apply_status_transition(WorkItemStatus::Completed, finished).unwrap();
    assert_eq!(item.work_duration_seconds, Some(42));
    assert!(!item.locked);
}

#[yare::parameterized(
    completed = { WorkItemStatus::Completed },
    failed = { WorkItemStatus::Failed },
    new = { WorkItemStatus::New },
    pending_user_action = { WorkItemStatus::PendingUserAction },
)]
fn non_in_progress_statuses_clear_the_lock(status: WorkItemStatus) {
    let mut item = WorkItem::builder()
        .status(WorkItemStatus::InProgress)
        .started_at(Some(Utc::now()))
        .locked(true)
        .build();
    item.apply_status_transition(status, Utc::now()).unwrap();
    assert!(!item.locked);
}

#[test]
fn in_progress_never_clears_the_lock() {
    assert!(!WorkItemStatus::InProgress.clears_lock());
}

#[test]
fn validate_rejects_oversized_reference() {
    let item = WorkItem::builder().reference("x".repeat(5000)).build();
    assert!(item.validate().is_err());
}

#[test]
fn validate_accepts_normal_reference() {
    let item = WorkItem::builder().reference("order-42").build();
    assert!(item.validate().is_ok());
}
