// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unit of work: a transactional boundary around one or more repository
//! mutations (spec §4.1).
//!
//! Because the backing [`Store`] is a single in-memory map set, "begin" is
//! a snapshot of that state and "rollback" is restoring it; "commit" is a
//! no-op since mutations already landed directly in the live store. This
//! gives the same all-or-nothing guarantee the spec asks for without a
//! two-phase commit protocol, at the cost of holding a full state clone for
//! the lifetime of the unit of work.

use crate::repo::{
    AuditLogRepository, CredentialRepository, ProcessRepository, ResourceRepository,
    SessionRepository, TriggerRepository, WorkItemRepository, WorkqueueRepository,
};
use crate::store::{Store, StoreInner};

pub struct UnitOfWork {
    store: Store,
    snapshot: StoreInner,
}

impl UnitOfWork {
    /// Open a unit of work against `store`, snapshotting its current state.
    pub fn begin(store: Store) -> Self {
        let snapshot = store.inner.read().clone();
        Self { store, snapshot }
    }

    pub fn processes(&self) -> ProcessRepository {
        ProcessRepository::new(self.store.clone())
    }

    pub fn resources(&self) -> ResourceRepository {
        ResourceRepository::new(self.store.clone())
    }

    pub fn sessions(&self) -> SessionRepository {
        SessionRepository::new(self.store.clone())
    }

    pub fn workqueues(&self) -> WorkqueueRepository {
        WorkqueueRepository::new(self.store.clone())
    }

    pub fn workitems(&self) -> WorkItemRepository {
        WorkItemRepository::new(self.store.clone())
    }

    pub fn triggers(&self) -> TriggerRepository {
        TriggerRepository::new(self.store.clone())
    }

    pub fn audit_logs(&self) -> AuditLogRepository {
        AuditLogRepository::new(self.store.clone())
    }

    pub fn credentials(&self) -> CredentialRepository {
        CredentialRepository::new(self.store.clone())
    }

    /// All mutations made through this unit of work stay applied.
    pub fn commit(self) {
        tracing::trace!("unit of work committed");
    }

    /// Discard every mutation made through this unit of work, restoring the
    /// store to the state it had when `begin` was called.
    pub fn rollback(self) {
        *self.store.inner.write() = self.snapshot;
        tracing::warn!("unit of work rolled back");
    }

    /// Run `f` inside this unit of work, committing on `Ok` and rolling back
    /// on `Err`. The common shape for scheduler-tick steps (spec §4.8).
    pub fn run<T, E>(self, f: impl FnOnce(&Self) -> Result<T, E>) -> Result<T, E> {
        match f(&self) {
            Ok(value) => {
                self.commit();
                Ok(value)
            }
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "unit_of_work_tests.rs"]
mod tests;
