// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use ctrlplane_core::{Process, ProcessId, Target};
use ctrlplane_storage::Store;

fn uow(store: &Store) -> UnitOfWork {
    UnitOfWork::begin(store.clone())
}

fn t(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, minute, 0).unwrap()
}

fn process(uow: &UnitOfWork) -> ProcessId {
    let p = Process {
        id: ProcessId::new(),
        name: "p".into(),
        description: String::new(),
        requirements: String::new(),
        target: Target::new("container", "x"),
        credential_names: Vec::new(),
        deleted: false,
    };
    uow.processes().create(p).id
}

#[test]
fn registry_routes_by_trigger_kind() {
    let store = Store::new();
    let uow = uow(&store);
    let registry = TriggerRegistry::new();
    let config = SchedulerConfig::default();
    let process_id = process(&uow);

    let date_trigger = Trigger {
        id: ctrlplane_core::TriggerId::new(),
        process_id,
        kind: ctrlplane_core::TriggerKind::Date { date: t(0) },
        parameters: String::new(),
        enabled: true,
        deleted: false,
        last_triggered: None,
    };
    let trigger = uow.triggers().create(date_trigger);

    assert!(registry.process(&uow, &trigger, t(1), &config).unwrap());
    let refreshed = uow.triggers().get(&trigger.id).unwrap();
    assert!(refreshed.deleted);
    assert!(!refreshed.enabled);
}
