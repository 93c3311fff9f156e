// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource registry (spec §4.2): enrollment, heartbeat, availability sweep,
//! and session-flush on detach. Grounded on
//! `original_source/backend/app/services/resource_service.py`.

use chrono::{DateTime, Utc};
use ctrlplane_core::{CoreResult, Resource, ResourceId, SessionStatus};
use ctrlplane_storage::UnitOfWork;

/// Enroll a worker (spec §4.2).
///
/// - No resource with `fqdn`: create fresh, `available=true, deleted=false`.
/// - Existing and not deleted: touch `last_seen`, refresh `capabilities`.
/// - Existing and deleted: revive (reset availability/liveness fields),
///   then flush any sessions still dangling on it.
pub fn enroll(
    uow: &UnitOfWork,
    fqdn: &str,
    name: &str,
    capabilities: &str,
    now: DateTime<Utc>,
) -> CoreResult<Resource> {
    let resources = uow.resources();
    match resources.find_by_fqdn(fqdn) {
        None => Ok(resources.create(Resource {
            id: ctrlplane_core::ResourceId::new(),
            fqdn: fqdn.to_string(),
            name: name.to_string(),
            capabilities: capabilities.to_string(),
            last_seen: now,
            available: true,
            deleted: false,
        })),
        Some(existing) if !existing.deleted => resources.update(&existing.id, |r| {
            r.last_seen = now;
            r.capabilities = capabilities.to_string();
        }),
        Some(existing) => {
            let revived = resources.update(&existing.id, |r| {
                r.name = name.to_string();
                r.capabilities = capabilities.to_string();
                r.last_seen = now;
                r.available = true;
                r.deleted = false;
            })?;
            flush_sessions(uow, revived.id, now)?;
            Ok(revived)
        }
    }
}

/// Heartbeat: touch `last_seen`, clear `deleted`. Idempotent (spec §4.2,
/// §8).
pub fn keep_alive(uow: &UnitOfWork, resource_id: &ResourceId, now: DateTime<Utc>) -> CoreResult<Resource> {
    uow.resources().update(resource_id, |r| {
        r.last_seen = now;
        r.deleted = false;
    })
}

/// Availability sweep (spec §4.2): detach any non-deleted resource that
/// hasn't pinged within `timeout` and has no `IN_PROGRESS` session
/// currently referencing it. Detaching marks it deleted and flushes its
/// dangling sessions. A resource with an in-flight session is left alone —
/// its session is reclaimed separately by `flush_dangling_sessions` (spec
/// §4.3).
pub fn update_availability(
    uow: &UnitOfWork,
    now: DateTime<Utc>,
    timeout: chrono::Duration,
) -> CoreResult<()> {
    let stale: Vec<ResourceId> = uow
        .resources()
        .get_all(false)
        .into_iter()
        .filter(|r| r.is_stale(now, timeout))
        .filter(|r| uow.sessions().get_by_resource_id(&r.id).map(|s| s.status) != Some(SessionStatus::InProgress))
        .map(|r| r.id)
        .collect();

    for id in stale {
        uow.resources().update(&id, |r| {
            r.deleted = true;
            r.available = false;
        })?;
        flush_sessions(uow, id, now)?;
    }
    Ok(())
}

/// Flush every non-terminal session still referencing `resource_id` (spec
/// §4.2): `IN_PROGRESS` sessions fail and release the resource reference;
/// `NEW` sessions become reschedulable again.
pub fn flush_sessions(uow: &UnitOfWork, resource_id: ResourceId, _now: DateTime<Utc>) -> CoreResult<()> {
    let dangling = uow
        .sessions()
        .filter(|s| s.resource_id == Some(resource_id) && !s.status.is_terminal());

    for session in dangling {
        match session.status {
            SessionStatus::InProgress => {
                uow.sessions().update(&session.id, |s| {
                    s.status = SessionStatus::Failed;
                    s.resource_id = None;
                })?;
            }
            SessionStatus::New => {
                uow.sessions().update(&session.id, |s| {
                    s.resource_id = None;
                    s.dispatched_at = None;
                })?;
            }
            SessionStatus::Completed | SessionStatus::Failed => {}
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
