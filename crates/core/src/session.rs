// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session entity: one execution of a process on a resource (spec §3, §4.3).

use crate::error::{CoreError, CoreResult};
use crate::process::ProcessId;
use crate::resource::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a session.
    pub struct SessionId("sess");
}

/// Session lifecycle status.
///
/// Transitions: `New -> InProgress -> {Completed, Failed}`. `Completed` and
/// `Failed` are terminal (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    New,
    InProgress,
    Completed,
    Failed,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Failed)
    }

    /// Whether `self -> to` is one of the three worker-initiated
    /// transitions allowed by spec §4.3.
    pub fn can_transition_to(self, to: SessionStatus) -> bool {
        matches!(
            (self, to),
            (SessionStatus::New, SessionStatus::InProgress)
                | (SessionStatus::InProgress, SessionStatus::Completed)
                | (SessionStatus::InProgress, SessionStatus::Failed)
        )
    }
}

crate::simple_display! {
    SessionStatus {
        New => "new",
        InProgress => "in_progress",
        Completed => "completed",
        Failed => "failed",
    }
}

/// One execution of a [`Process`](crate::process::Process) on a
/// [`Resource`](crate::resource::Resource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub process_id: ProcessId,
    pub resource_id: Option<ResourceId>,
    pub dispatched_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    /// Opaque string, bounded to a caller-configured maximum length.
    #[serde(default)]
    pub parameters: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
    /// Out-of-band cooperative stop signal, opaque to the core; honored by
    /// workers, never read by the scheduler itself (spec §5).
    #[serde(default)]
    pub stop_requested: bool,
}

impl Session {
    /// True iff the invariant `resource_id = NULL ⇔ dispatched_at = NULL ⇔
    /// status = NEW` holds for a not-yet-dispatched session (spec §3).
    pub fn is_pending_dispatch(&self) -> bool {
        self.status == SessionStatus::New && self.resource_id.is_none() && self.dispatched_at.is_none()
    }

    /// Validate and apply a worker-initiated status transition.
    ///
    /// Per spec §4.3: the transition must be one of the three allowed
    /// edges, and `resource_id` must already be set (a session with no
    /// resource cannot report progress).
    pub fn apply_status_transition(&mut self, to: SessionStatus, now: DateTime<Utc>) -> CoreResult<()> {
        if self.resource_id.is_none() {
            return Err(CoreError::invalid_transition(
                "Session",
                self.id.to_string(),
                self.status.to_string(),
                to.to_string(),
            ));
        }
        if !self.status.can_transition_to(to) {
            return Err(CoreError::invalid_transition(
                "Session",
                self.id.to_string(),
                self.status.to_string(),
                to.to_string(),
            ));
        }
        self.status = to;
        if to.is_terminal() {
            // Resource release is the caller's responsibility (it owns the
            // Resource repository too); this only marks the session side.
            let _ = now;
        }
        Ok(())
    }
}

crate::builder! {
    pub struct SessionBuilder => Session {
        set {
            process_id: ProcessId = ProcessId::new(),
            status: SessionStatus = SessionStatus::New,
            resource_id: Option<ResourceId> = None,
            dispatched_at: Option<DateTime<Utc>> = None,
            parameters: Option<String> = None,
            created_at: DateTime<Utc> = Utc::now(),
            deleted: bool = false,
            stop_requested: bool = false,
        }
        computed {
            id: SessionId = SessionId::new(),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
