// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use ctrlplane_core::{Resource, ResourceId};

// spec §3 invariant `deleted ⇒ ¬available`: a soft-deleted resource must
// never read as available.
soft_delete_repository!(ResourceRepository, Resource, ResourceId, resources, "Resource", |r: &mut Resource| {
    r.available = false;
});

impl ResourceRepository {
    /// Look up a resource by its (unique) fqdn, deleted or not — enroll
    /// needs to see soft-deleted rows to decide whether to revive them
    /// (spec §4.2).
    pub fn find_by_fqdn(&self, fqdn: &str) -> Option<Resource> {
        self.store.inner.read().resources.values().find(|r| r.fqdn == fqdn).cloned()
    }

    /// Non-deleted resources with no active (non-terminal) session attached
    /// (spec §4.1).
    pub fn get_available_resources(&self) -> Vec<Resource> {
        let guard = self.store.inner.read();
        let active_resource_ids: std::collections::HashSet<ResourceId> = guard
            .sessions
            .values()
            .filter(|s| !s.status.is_terminal())
            .filter_map(|s| s.resource_id)
            .collect();
        guard
            .resources
            .values()
            .filter(|r| !r.deleted && !active_resource_ids.contains(&r.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
