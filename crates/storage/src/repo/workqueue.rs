// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use ctrlplane_core::{Workqueue, WorkqueueId};

soft_delete_repository!(WorkqueueRepository, Workqueue, WorkqueueId, workqueues, "Workqueue");

impl WorkqueueRepository {
    pub fn find_by_name(&self, name: &str) -> Option<Workqueue> {
        self.store.inner.read().workqueues.values().find(|q| q.name == name).cloned()
    }
}

#[cfg(test)]
#[path = "workqueue_tests.rs"]
mod tests;
