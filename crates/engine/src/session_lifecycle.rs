// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session lifecycle service (spec §4.3): orphan rescheduling, dangling
//! session timeout, dedup'd session creation, worker-initiated status
//! updates.

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreResult, ProcessId, Session, SessionId, SessionStatus};
use ctrlplane_storage::UnitOfWork;

/// For every `NEW` session with a resource assigned, clear the assignment
/// if the resource is gone or soft-deleted (spec §4.3). Run every tick,
/// before dispatch.
pub fn reschedule_orphaned_sessions(uow: &UnitOfWork) -> CoreResult<usize> {
    let orphaned: Vec<SessionId> = uow
        .sessions()
        .get_new_sessions()
        .into_iter()
        .filter_map(|s| s.resource_id.map(|rid| (s.id, rid)))
        .filter(|(_, rid)| match uow.resources().get(rid) {
            Ok(r) => r.deleted,
            Err(_) => true,
        })
        .map(|(id, _)| id)
        .collect();

    let count = orphaned.len();
    for id in orphaned {
        uow.sessions().update(&id, |s| {
            s.resource_id = None;
            s.dispatched_at = None;
        })?;
    }
    Ok(count)
}

/// Force-fail any `IN_PROGRESS` session dispatched more than `timeout` ago
/// whose resource has vanished or been deleted (spec §4.3, §8 scenario 6).
/// Sessions on live resources run unbounded.
pub fn flush_dangling_sessions(
    uow: &UnitOfWork,
    now: DateTime<Utc>,
    timeout: chrono::Duration,
) -> CoreResult<usize> {
    let dangling: Vec<SessionId> = uow
        .sessions()
        .get_active_sessions()
        .into_iter()
        .filter(|s| s.status == SessionStatus::InProgress)
        .filter(|s| s.dispatched_at.map(|at| now.signed_duration_since(at) > timeout).unwrap_or(false))
        .filter(|s| {
            s.resource_id.map(|rid| uow.resources().get(&rid).map(|r| r.deleted).unwrap_or(true)).unwrap_or(true)
        })
        .map(|s| s.id)
        .collect();

    let count = dangling.len();
    for id in dangling {
        uow.sessions().apply_status_transition(&id, SessionStatus::Failed, now)?;
    }
    Ok(count)
}

/// Create a session for `process_id` (spec §4.3). When `force` is false and
/// a `NEW` session already exists for this process, this is a no-op
/// returning `None` (dedup rule).
pub fn create_session(
    uow: &UnitOfWork,
    process_id: ProcessId,
    force: bool,
    parameters: Option<String>,
    now: DateTime<Utc>,
) -> CoreResult<Option<Session>> {
    if !force && uow.sessions().has_pending_session_for_process(&process_id) {
        return Ok(None);
    }
    let session = Session {
        id: ctrlplane_core::SessionId::new(),
        process_id,
        resource_id: None,
        dispatched_at: None,
        status: SessionStatus::New,
        parameters,
        created_at: now,
        deleted: false,
        stop_requested: false,
    };
    Ok(Some(uow.sessions().create(session)))
}

/// Apply a worker-initiated status update (spec §4.3): only the three
/// enforced edges are accepted, and the session must already carry a
/// `resource_id`. Terminal outcomes release the paired resource.
pub fn update_status(
    uow: &UnitOfWork,
    session_id: &SessionId,
    to: SessionStatus,
    now: DateTime<Utc>,
) -> CoreResult<Session> {
    uow.sessions().apply_status_transition(session_id, to, now)
}

#[cfg(test)]
#[path = "session_lifecycle_tests.rs"]
mod tests;
