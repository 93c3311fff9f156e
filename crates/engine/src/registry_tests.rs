// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::{Duration, TimeZone};
use ctrlplane_core::{Session, SessionStatus};
use ctrlplane_storage::Store;

fn uow(store: &Store) -> UnitOfWork {
    UnitOfWork::begin(store.clone())
}

fn t(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, minute, 0).unwrap()
}

#[test]
fn enroll_creates_new_resource() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python linux", t(0)).unwrap();
    assert!(r.available);
    assert!(!r.deleted);
    assert_eq!(r.last_seen, t(0));
}

#[test]
fn repeated_enroll_is_idempotent_on_id() {
    let store = Store::new();
    let uow = uow(&store);
    let first = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    let second = enroll(&uow, "worker-1.internal", "worker-1", "python docker", t(1)).unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(second.capabilities, "python docker");
    assert_eq!(second.last_seen, t(1));
}

#[test]
fn enroll_revives_a_deleted_resource_and_flushes_sessions() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    uow.resources().update(&r.id, |res| res.deleted = true).unwrap();

    let process_id = ctrlplane_core::ProcessId::new();
    let new_session = Session {
        id: ctrlplane_core::SessionId::new(),
        process_id,
        resource_id: Some(r.id),
        dispatched_at: Some(t(0)),
        status: SessionStatus::New,
        parameters: None,
        created_at: t(0),
        deleted: false,
        stop_requested: false,
    };
    uow.sessions().create(new_session.clone());

    let revived = enroll(&uow, "worker-1.internal", "worker-1", "python", t(2)).unwrap();
    assert!(revived.available);
    assert!(!revived.deleted);

    let flushed = uow.sessions().get(&new_session.id).unwrap();
    assert!(flushed.resource_id.is_none());
    assert!(flushed.dispatched_at.is_none());
}

#[test]
fn keep_alive_is_idempotent_and_monotonic() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    let first = keep_alive(&uow, &r.id, t(1)).unwrap();
    let second = keep_alive(&uow, &r.id, t(2)).unwrap();
    assert_eq!(first.id, second.id);
    assert!(second.last_seen >= first.last_seen);
}

#[test]
fn sweep_detaches_stale_resource_with_no_in_progress_session() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    update_availability(&uow, t(0) + Duration::minutes(11), Duration::minutes(10)).unwrap();
    let refreshed = uow.resources().get(&r.id).unwrap();
    assert!(refreshed.deleted);
    assert!(!refreshed.available, "spec §3 invariant deleted ⇒ ¬available must hold after the sweep");
}

#[test]
fn sweep_does_not_detach_resource_with_in_progress_session() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    let process_id = ctrlplane_core::ProcessId::new();
    uow.sessions().create(Session {
        id: ctrlplane_core::SessionId::new(),
        process_id,
        resource_id: Some(r.id),
        dispatched_at: Some(t(0)),
        status: SessionStatus::InProgress,
        parameters: None,
        created_at: t(0),
        deleted: false,
        stop_requested: false,
    });

    update_availability(&uow, t(0) + Duration::minutes(11), Duration::minutes(10)).unwrap();
    let refreshed = uow.resources().get(&r.id).unwrap();
    assert!(!refreshed.deleted);
}

#[test]
fn sweep_leaves_fresh_resources_alone() {
    let store = Store::new();
    let uow = uow(&store);
    let r = enroll(&uow, "worker-1.internal", "worker-1", "python", t(0)).unwrap();
    update_availability(&uow, t(5), Duration::minutes(10)).unwrap();
    let refreshed = uow.resources().get(&r.id).unwrap();
    assert!(!refreshed.deleted);
}
