// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatcher (spec §4.6): drains pending sessions into available
//! resources, FIFO by session `created_at`, refreshing the candidate list
//! after every pairing so a resource is never handed out twice in one pass.

use chrono::{DateTime, Utc};
use ctrlplane_core::CoreResult;
use ctrlplane_storage::UnitOfWork;

use crate::matcher::find_best_resource;

/// Run one dispatch pass (spec §4.6): sweep availability, then pair each
/// pending session (oldest first) with the most specific compatible free
/// resource. Returns the number of sessions dispatched this pass.
pub fn dispatch_once(uow: &UnitOfWork, now: DateTime<Utc>, stale_timeout: chrono::Duration) -> CoreResult<usize> {
    crate::registry::update_availability(uow, now, stale_timeout)?;

    let pending: Vec<_> =
        uow.sessions().get_new_sessions().into_iter().filter(|s| s.resource_id.is_none()).collect();

    let mut dispatched = 0;
    for session in pending {
        let process = match uow.processes().get(&session.process_id) {
            Ok(p) if !p.deleted => p,
            _ => continue,
        };
        let requirements = process.requirement_set();
        let available = uow.resources().get_available_resources();
        let Some(resource) = find_best_resource(&requirements, &available) else {
            continue;
        };
        uow.sessions().dispatch(&session.id, resource.id, now)?;
        dispatched += 1;
    }
    Ok(dispatched)
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
