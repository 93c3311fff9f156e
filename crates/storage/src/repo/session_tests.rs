use super::*;
use crate::repo::ResourceRepository;
use crate::store::Store;
use chrono::Utc;
use ctrlplane_core::{ProcessId, Resource, Session};

#[test]
fn get_new_sessions_orders_by_created_at() {
    let store = Store::new();
    let repo = SessionRepository::new(store);
    let first = repo.create(Session::builder().created_at(Utc::now() - chrono::Duration::seconds(10)).build());
    let second = repo.create(Session::builder().created_at(Utc::now()).build());
    let new_sessions = repo.get_new_sessions();
    assert_eq!(new_sessions.iter().map(|s| s.id).collect::<Vec<_>>(), vec![first.id, second.id]);
}

#[test]
fn has_pending_session_for_process_detects_existing_new_session() {
    let store = Store::new();
    let repo = SessionRepository::new(store);
    let process_id = ProcessId::new();
    assert!(!repo.has_pending_session_for_process(&process_id));
    repo.create(Session::builder().process_id(process_id).build());
    assert!(repo.has_pending_session_for_process(&process_id));
}

#[test]
fn dispatch_sets_fields_and_marks_resource_unavailable() {
    let store = Store::new();
    let sessions = SessionRepository::new(store.clone());
    let resources = ResourceRepository::new(store);
    let resource = resources.create(Resource::builder().available(true).build());
    let session = sessions.create(Session::builder().build());

    let now = Utc::now();
    let dispatched = sessions.dispatch(&session.id, resource.id, now).unwrap();
    assert_eq!(dispatched.resource_id, Some(resource.id));
    assert_eq!(dispatched.dispatched_at, Some(now));
    assert!(!resources.get(&resource.id).unwrap().available);
}

#[test]
fn terminal_transition_releases_the_resource() {
    let store = Store::new();
    let sessions = SessionRepository::new(store.clone());
    let resources = ResourceRepository::new(store);
    let resource = resources.create(Resource::builder().available(false).build());
    let session = sessions.create(
        Session::builder()
            .status(ctrlplane_core::SessionStatus::InProgress)
            .resource_id(Some(resource.id))
            .build(),
    );

    sessions.apply_status_transition(&session.id, ctrlplane_core::SessionStatus::Completed, Utc::now()).unwrap();
    assert!(resources.get(&resource.id).unwrap().available);
}

#[test]
fn get_active_sessions_for_process_filters_by_process_id() {
    let store = Store::new();
    let repo = SessionRepository::new(store);
    let target_process = ProcessId::new();
    repo.create(Session::builder().process_id(target_process).build());
    repo.create(Session::builder().build());
    assert_eq!(repo.get_active_sessions_for_process(&target_process).len(), 1);
}

