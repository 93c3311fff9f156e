// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{Duration, TimeZone};
use ctrlplane_core::{Process, ProcessId, Resource, SessionStatus, Target};
use ctrlplane_storage::Store;

fn uow(store: &Store) -> UnitOfWork {
    UnitOfWork::begin(store.clone())
}

fn t(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, minute, 0).unwrap()
}

fn process(uow: &UnitOfWork, requirements: &str) -> ProcessId {
    let p = Process {
        id: ProcessId::new(),
        name: "p".into(),
        description: String::new(),
        requirements: requirements.into(),
        target: Target::new("container", "x"),
        credential_names: Vec::new(),
        deleted: false,
    };
    uow.processes().create(p).id
}

fn resource(uow: &UnitOfWork, capabilities: &str) -> Resource {
    uow.resources().create(Resource::builder().capabilities(capabilities).build())
}

#[test]
fn dispatches_fifo_to_compatible_resources() {
    let store = Store::new();
    let uow = uow(&store);
    let process_id = process(&uow, "python");
    resource(&uow, "python");

    let session = crate::session_lifecycle::create_session(&uow, process_id, false, None, t(0))
        .unwrap()
        .unwrap();

    let dispatched = dispatch_once(&uow, t(1), Duration::minutes(10)).unwrap();
    assert_eq!(dispatched, 1);
    let refreshed = uow.sessions().get(&session.id).unwrap();
    assert!(refreshed.resource_id.is_some());
    assert!(refreshed.dispatched_at.is_some());
}

#[test]
fn no_compatible_resource_leaves_session_pending_indefinitely() {
    let store = Store::new();
    let uow = uow(&store);
    let process_id = process(&uow, "python linux");
    resource(&uow, "java");

    let session = crate::session_lifecycle::create_session(&uow, process_id, false, None, t(0))
        .unwrap()
        .unwrap();

    for tick in 1..=5 {
        dispatch_once(&uow, t(tick), Duration::minutes(10)).unwrap();
    }
    let refreshed = uow.sessions().get(&session.id).unwrap();
    assert_eq!(refreshed.status, SessionStatus::New);
    assert!(refreshed.resource_id.is_none());
}

#[test]
fn a_resource_is_never_reused_within_one_pass() {
    let store = Store::new();
    let uow = uow(&store);
    let process_id = process(&uow, "python");
    resource(&uow, "python");

    let first = crate::session_lifecycle::create_session(&uow, process_id, false, None, t(0))
        .unwrap()
        .unwrap();
    let second = crate::session_lifecycle::create_session(&uow, process_id, true, None, t(1))
        .unwrap()
        .unwrap();

    dispatch_once(&uow, t(2), Duration::minutes(10)).unwrap();

    let first = uow.sessions().get(&first.id).unwrap();
    let second = uow.sessions().get(&second.id).unwrap();
    let dispatched_count = [&first, &second].iter().filter(|s| s.resource_id.is_some()).count();
    assert_eq!(dispatched_count, 1);
    // FIFO: the earlier-created session wins the single resource.
    assert!(first.resource_id.is_some());
    assert!(second.resource_id.is_none());
}
