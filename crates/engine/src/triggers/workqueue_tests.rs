// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::triggers::TriggerProcessor as _;
use chrono::TimeZone;
use ctrlplane_core::{Process, ProcessId, Resource, Target, TriggerId, Workqueue, WorkqueueId};
use ctrlplane_storage::Store;

fn uow(store: &Store) -> UnitOfWork {
    UnitOfWork::begin(store.clone())
}

fn t(m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, m, 0).unwrap()
}

fn process_with_requirements(uow: &UnitOfWork, requirements: &str) -> ProcessId {
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

fn queue(uow: &UnitOfWork) -> WorkqueueId {
    uow.workqueues()
        .create(Workqueue { id: WorkqueueId::new(), name: "q".into(), description: String::new(), enabled: true, deleted: false })
        .id
}

fn resource(uow: &UnitOfWork, capabilities: &str, now: DateTime<Utc>) {
    uow.resources().create(Resource {
        id: ctrlplane_core::ResourceId::new(),
        fqdn: "host".into(),
        name: "host".into(),
        capabilities: capabilities.into(),
        last_seen: now,
        available: true,
        deleted: false,
    });
}

fn seed_items(uow: &UnitOfWork, queue_id: WorkqueueId, count: usize, now: DateTime<Utc>) {
    for _ in 0..count {
        crate::workqueue_service::enqueue(uow, queue_id, serde_json::Value::Null, String::new(), now).unwrap();
    }
}

fn workqueue_trigger(uow: &UnitOfWork, process_id: ProcessId, queue_id: WorkqueueId, threshold: u32, limit: u32) -> Trigger {
    uow.triggers().create(Trigger {
        id: TriggerId::new(),
        process_id,
        kind: TriggerKind::Workqueue { workqueue_id: queue_id, scale_up_threshold: threshold, resource_limit: limit },
        parameters: String::new(),
        enabled: true,
        deleted: false,
        last_triggered: None,
    })
}

#[test]
fn scales_up_sessions_with_backlog_spec_scenario_3() {
    let store = Store::new();
    let uow = uow(&store);
    let config = SchedulerConfig::default();
    let now = t(0);

    let process_id = process_with_requirements(&uow, "python-linux");
    let queue_id = queue(&uow);
    // P=12, threshold=5, limit=3 -> required = floor(12/5) = 2.
    seed_items(&uow, queue_id, 12, now);
    resource(&uow, "python-linux", now);
    resource(&uow, "python-linux-docker", now);
    resource(&uow, "java", now);

    let trigger = workqueue_trigger(&uow, process_id, queue_id, 5, 3);
    let processor = WorkqueueProcessor;

    processor.process(&uow, &trigger, now, &config).unwrap();
    assert_eq!(uow.sessions().get_active_sessions_for_process(&process_id).len(), 1);

    // a second tick should scale up to the required count of 2.
    let refreshed = uow.triggers().get(&trigger.id).unwrap();
    processor.process(&uow, &refreshed, now + chrono::Duration::minutes(1), &config).unwrap();
    assert_eq!(uow.sessions().get_active_sessions_for_process(&process_id).len(), 2);

    // a third tick holds at 2: `required` is already met.
    let refreshed = uow.triggers().get(&trigger.id).unwrap();
    processor.process(&uow, &refreshed, now + chrono::Duration::minutes(2), &config).unwrap();
    assert_eq!(uow.sessions().get_active_sessions_for_process(&process_id).len(), 2);
}

#[test]
fn does_not_fire_when_queue_is_empty() {
    let store = Store::new();
    let uow = uow(&store);
    let config = SchedulerConfig::default();
    let now = t(0);

    let process_id = process_with_requirements(&uow, "python-linux");
    let queue_id = queue(&uow);
    resource(&uow, "python-linux", now);

    let trigger = workqueue_trigger(&uow, process_id, queue_id, 5, 3);
    let processor = WorkqueueProcessor;
    processor.process(&uow, &trigger, now, &config).unwrap();

    assert_eq!(uow.sessions().get_active_sessions_for_process(&process_id).len(), 0);
}

#[test]
fn does_not_fire_without_a_compatible_free_resource() {
    let store = Store::new();
    let uow = uow(&store);
    let config = SchedulerConfig::default();
    let now = t(0);

    let process_id = process_with_requirements(&uow, "python-linux");
    let queue_id = queue(&uow);
    seed_items(&uow, queue_id, 12, now);
    resource(&uow, "java", now);

    let trigger = workqueue_trigger(&uow, process_id, queue_id, 5, 3);
    let processor = WorkqueueProcessor;
    processor.process(&uow, &trigger, now, &config).unwrap();

    assert_eq!(uow.sessions().get_active_sessions_for_process(&process_id).len(), 0);
}
