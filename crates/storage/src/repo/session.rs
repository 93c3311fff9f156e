// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use chrono::{DateTime, Utc};
use ctrlplane_core::{ProcessId, ResourceId, Session, SessionId, SessionStatus};

soft_delete_repository!(SessionRepository, Session, SessionId, sessions, "Session");

impl SessionRepository {
    /// First non-terminal session with `resource_id = r` (spec §4.1).
    pub fn get_by_resource_id(&self, resource_id: &ResourceId) -> Option<Session> {
        self.store
            .inner
            .read()
            .sessions
            .values()
            .find(|s| s.resource_id == Some(*resource_id) && !s.status.is_terminal())
            .cloned()
    }

    /// NEW sessions, ordered by `created_at` ascending (spec §4.1, FIFO
    /// dispatch fairness in §4.6).
    pub fn get_new_sessions(&self) -> Vec<Session> {
        let mut sessions: Vec<Session> = self
            .store
            .inner
            .read()
            .sessions
            .values()
            .filter(|s| s.status == SessionStatus::New && !s.deleted)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.created_at);
        sessions
    }

    /// Non-terminal sessions (NEW or IN_PROGRESS), ordered by `created_at`
    /// ascending (spec §4.1).
    pub fn get_active_sessions(&self) -> Vec<Session> {
        let mut sessions: Vec<Session> = self
            .store
            .inner
            .read()
            .sessions
            .values()
            .filter(|s| !s.status.is_terminal() && !s.deleted)
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.created_at);
        sessions
    }

    /// Active sessions for a single process (used by the workqueue trigger
    /// processor, spec §4.7.3, to compute `A`).
    pub fn get_active_sessions_for_process(&self, process_id: &ProcessId) -> Vec<Session> {
        self.get_active_sessions().into_iter().filter(|s| &s.process_id == process_id).collect()
    }

    /// A NEW session already exists for `process_id` (spec §4.3 dedup rule
    /// in `create_session`).
    pub fn has_pending_session_for_process(&self, process_id: &ProcessId) -> bool {
        self.store
            .inner
            .read()
            .sessions
            .values()
            .any(|s| &s.process_id == process_id && s.status == SessionStatus::New && !s.deleted)
    }

    /// Dispatch a session: set `resource_id` and `dispatched_at`, and mark
    /// the paired resource unavailable, atomically under one write guard
    /// (spec §4.6 step 3).
    pub fn dispatch(
        &self,
        session_id: &SessionId,
        resource_id: ResourceId,
        now: DateTime<Utc>,
    ) -> ctrlplane_core::CoreResult<Session> {
        let mut guard = self.store.inner.write();
        let session = guard
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| ctrlplane_core::CoreError::not_found("Session", session_id.to_string()))?;
        session.resource_id = Some(resource_id);
        session.dispatched_at = Some(now);
        let dispatched = session.clone();
        if let Some(resource) = guard.resources.get_mut(&resource_id) {
            resource.available = false;
        }
        Ok(dispatched)
    }

    /// Apply a worker-initiated status transition, releasing the paired
    /// resource on any terminal outcome (spec §4.3).
    pub fn apply_status_transition(
        &self,
        session_id: &SessionId,
        to: SessionStatus,
        now: DateTime<Utc>,
    ) -> ctrlplane_core::CoreResult<Session> {
        let mut guard = self.store.inner.write();
        let session = guard
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| ctrlplane_core::CoreError::not_found("Session", session_id.to_string()))?;
        session.apply_status_transition(to, now)?;
        let updated = session.clone();
        if to.is_terminal() {
            if let Some(resource_id) = updated.resource_id {
                if let Some(resource) = guard.resources.get_mut(&resource_id) {
                    resource.available = true;
                }
            }
        }
        Ok(updated)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
