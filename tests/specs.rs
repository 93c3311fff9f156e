// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-level integration tests exercising the engine end to end
//! against a real `Store`, covering the spec's literal scenarios that
//! span more than one engine module or need genuine async concurrency.

use chrono::{DateTime, TimeZone, Utc};
use ctrlplane_core::{
    FakeClock, Process, ProcessId, Resource, ResourceId, Session, SessionStatus, Target, Trigger,
    TriggerId, TriggerKind, WorkItem, WorkItemStatus, Workqueue, WorkqueueId,
};
use ctrlplane_engine::{workqueue_service, Scheduler, SchedulerConfig};
use ctrlplane_storage::{Store, UnitOfWork};

fn t(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, h, m, s).unwrap()
}

async fn claim_once(
    store: Store,
    queue_id: WorkqueueId,
    config: SchedulerConfig,
) -> Option<WorkItem> {
    let uow = UnitOfWork::begin(store);
    workqueue_service::claim_next(&uow, &queue_id, t(0, 0, 1), &config).await.unwrap()
}

fn seed_process(store: &Store, requirements: &str) -> ProcessId {
    let uow = UnitOfWork::begin(store.clone());
    let process = Process {
        id: ProcessId::new(),
        name: "end-to-end".into(),
        description: String::new(),
        requirements: requirements.into(),
        target: Target::new("container", "worker-image"),
        credential_names: Vec::new(),
        deleted: false,
    };
    let id = uow.processes().create(process).id;
    uow.commit();
    id
}

/// Spec §8 scenario 5: two concurrent claims against a single-item queue —
/// exactly one wins the item, the other sees an empty queue once its
/// retries are exhausted, never a second copy of the same item.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_claim_contention_yields_exactly_one_winner_spec_scenario_5() {
    let store = Store::new();
    let queue_id;
    {
        let uow = UnitOfWork::begin(store.clone());
        queue_id = uow
            .workqueues()
            .create(Workqueue { id: WorkqueueId::new(), name: "q".into(), description: String::new(), enabled: true, deleted: false })
            .id;
        workqueue_service::enqueue(&uow, queue_id, serde_json::Value::Null, String::new(), t(0, 0, 0)).unwrap();
        uow.commit();
    }

    let config = SchedulerConfig::default();
    let (first, second) = tokio::join!(
        claim_once(store.clone(), queue_id, config.clone()),
        claim_once(store.clone(), queue_id, config.clone())
    );

    let winners = [first, second].into_iter().flatten().count();
    assert_eq!(winners, 1, "exactly one caller should receive the item");

    let uow = UnitOfWork::begin(store.clone());
    let remaining_new = workqueue_service::count(&uow, &queue_id, WorkItemStatus::New);
    let in_progress = workqueue_service::count(&uow, &queue_id, WorkItemStatus::InProgress);
    assert_eq!(remaining_new, 0);
    assert_eq!(in_progress, 1, "the claimed item is never re-dispensed");
}

/// Drives `Scheduler::run_loop` itself (not just bare `tick`) through a real
/// tokio interval and a `CancellationToken`-triggered shutdown, using
/// paused time so the cron trigger's wall-clock boundaries are exact.
#[tokio::test(start_paused = true)]
async fn scheduler_run_loop_ticks_on_interval_and_shuts_down_on_cancel() {
    let store = Store::new();
    let process_id = seed_process(&store, "");
    {
        let uow = UnitOfWork::begin(store.clone());
        uow.triggers().create(Trigger {
            id: TriggerId::new(),
            process_id,
            kind: TriggerKind::Cron { cron: "* * * * *".to_string() },
            parameters: String::new(),
            enabled: true,
            deleted: false,
            last_triggered: None,
        });
        uow.commit();
    }

    let clock = FakeClock::new(t(0, 1, 0));
    let mut config = SchedulerConfig::default();
    config.interval = std::time::Duration::from_secs(60);
    let scheduler = Scheduler::new(store.clone(), clock.clone(), config);

    let cancel = tokio_util::sync::CancellationToken::new();
    let run_cancel = cancel.clone();
    let handle = tokio::spawn(async move { scheduler.run_loop(run_cancel).await });

    // Two interval ticks, advancing the fake business clock alongside the
    // paused tokio clock so the cron guard sees a new minute each time.
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    tokio::task::yield_now().await;
    clock.set(t(0, 2, 0));
    tokio::time::advance(std::time::Duration::from_secs(60)).await;
    tokio::task::yield_now().await;

    cancel.cancel();
    handle.await.unwrap();

    let uow = UnitOfWork::begin(store.clone());
    let sessions: Vec<Session> = uow.sessions().get_all(false);
    assert!(sessions.len() >= 2, "expected at least two cron-fired sessions across two ticks, got {}", sessions.len());
    assert!(sessions.iter().all(|s| s.status == SessionStatus::New));
}

/// Boundary behavior (spec §8): a process whose requirements no resource
/// satisfies stays pending forever, never erroring and never partially
/// dispatching.
#[test]
fn session_with_no_compatible_resource_stays_pending_across_ticks() {
    let store = Store::new();
    let process_id = seed_process(&store, "gpu cuda");
    {
        let uow = UnitOfWork::begin(store.clone());
        uow.resources().create(Resource {
            id: ResourceId::new(),
            fqdn: "r1".into(),
            name: "r1".into(),
            capabilities: "python linux".into(),
            last_seen: t(0, 0, 0),
            available: true,
            deleted: false,
        });
        uow.commit();
    }

    let clock = FakeClock::new(t(0, 0, 0));
    let scheduler = Scheduler::new(store.clone(), clock.clone(), SchedulerConfig::default());

    {
        let uow = UnitOfWork::begin(store.clone());
        let session = ctrlplane_engine::session_lifecycle::create_session(&uow, process_id, true, None, t(0, 0, 0))
            .unwrap()
            .unwrap();
        uow.commit();
        assert_eq!(session.status, SessionStatus::New);
        assert!(session.resource_id.is_none());
    }

    for minute in 1..5 {
        clock.set(t(0, minute, 0));
        scheduler.tick().unwrap();
    }

    let uow = UnitOfWork::begin(store.clone());
    let sessions = uow.sessions().get_active_sessions_for_process(&process_id);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].status, SessionStatus::New);
    assert!(sessions[0].resource_id.is_none());
}
