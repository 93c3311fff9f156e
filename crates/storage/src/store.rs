// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory backing store: one lock guarding all entity maps.
//!
//! A single [`parking_lot::RwLock`] rather than per-entity locks makes the
//! unit-of-work snapshot/restore in [`crate::unit_of_work`] trivial and
//! gives the "single transaction per tick" invariant (spec §4.8, §5) for
//! free: every mutation inside a tick holds the same write guard.

use ctrlplane_core::{
    AuditLog, AuditLogId, Credential, CredentialId, Process, ProcessId, Resource, ResourceId,
    Session, SessionId, Trigger, TriggerId, WorkItem, WorkItemId, Workqueue, WorkqueueId,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default, Clone)]
pub(crate) struct StoreInner {
    pub processes: HashMap<ProcessId, Process>,
    pub resources: HashMap<ResourceId, Resource>,
    pub sessions: HashMap<SessionId, Session>,
    pub workqueues: HashMap<WorkqueueId, Workqueue>,
    pub workitems: HashMap<WorkItemId, WorkItem>,
    pub triggers: HashMap<TriggerId, Trigger>,
    pub audit_logs: HashMap<AuditLogId, AuditLog>,
    pub credentials: HashMap<CredentialId, Credential>,
}

/// The process's sole backing store. Cheaply cloneable (`Arc`-wrapped);
/// every repository and unit of work holds a handle to the same instance.
#[derive(Clone, Default)]
pub struct Store {
    pub(crate) inner: Arc<RwLock<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
