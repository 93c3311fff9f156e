// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ctrlplane_core::{AuditLog, Resource, Session, WorkItem};

#[test]
fn resource_summary_mirrors_the_enrolled_resource() {
    let resource = Resource::builder().fqdn("worker-7.internal").name("worker-7").capabilities("python linux").build();
    let summary = ResourceSummary::from(&resource);
    assert_eq!(summary.id, resource.id);
    assert_eq!(summary.fqdn, "worker-7.internal");
    assert_eq!(summary.capabilities, "python linux");
    assert!(summary.available);
}

#[test]
fn session_summary_mirrors_the_session() {
    let session = Session::builder().build();
    let summary = SessionSummary::from(&session);
    assert_eq!(summary.id, session.id);
    assert_eq!(summary.status, session.status);
}

#[test]
fn work_item_summary_mirrors_the_item() {
    let item = WorkItem::builder().reference("order-42").build();
    let summary = WorkItemSummary::from(&item);
    assert_eq!(summary.id, item.id);
    assert_eq!(summary.reference, "order-42");
}

#[test]
fn audit_log_summary_mirrors_the_entry() {
    let log = AuditLog::builder().message("dispatched session").build();
    let summary = AuditLogSummary::from(&log);
    assert_eq!(summary.id, log.id);
    assert_eq!(summary.message, "dispatched session");
}
