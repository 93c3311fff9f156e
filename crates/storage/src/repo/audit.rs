// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::store::Store;
use ctrlplane_core::{AuditLog, AuditLogId, CoreError, CoreResult};

/// Append-only: `AuditLog` rows are never updated or deleted (spec §3, §6).
pub struct AuditLogRepository {
    store: Store,
}

impl AuditLogRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn get(&self, id: &AuditLogId) -> CoreResult<AuditLog> {
        self.store
            .inner
            .read()
            .audit_logs
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("AuditLog", id.to_string()))
    }

    pub fn create(&self, entry: AuditLog) -> AuditLog {
        self.store.inner.write().audit_logs.insert(entry.id, entry.clone());
        entry
    }

    pub fn get_all(&self) -> Vec<AuditLog> {
        self.store.inner.read().audit_logs.values().cloned().collect()
    }

    pub fn filter(&self, predicate: impl Fn(&AuditLog) -> bool) -> Vec<AuditLog> {
        self.store.inner.read().audit_logs.values().filter(|e| predicate(e)).cloned().collect()
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
