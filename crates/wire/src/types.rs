// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire-facing summaries of the core entities a façade exposes over the
//! interfaces named in spec §6. Deliberately narrower than the core
//! entities themselves — `deleted` rows never reach the wire (callers see
//! `Gone` instead), and fields opaque to the core (`Resource.last_seen`
//! precision, `Process` internals) are flattened to what a caller needs.

use chrono::{DateTime, Utc};
use ctrlplane_core::{AuditLog, Resource, ResourceId, Session, SessionId, SessionStatus, WorkItem, WorkItemId, WorkItemStatus};
use serde::{Deserialize, Serialize};

/// Wire view of a `Resource` (spec §6: worker enrollment / heartbeat).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub id: ResourceId,
    pub fqdn: String,
    pub name: String,
    pub capabilities: String,
    pub last_seen: DateTime<Utc>,
    pub available: bool,
}

impl From<&Resource> for ResourceSummary {
    fn from(r: &Resource) -> Self {
        ResourceSummary {
            id: r.id,
            fqdn: r.fqdn.clone(),
            name: r.name.clone(),
            capabilities: r.capabilities.clone(),
            last_seen: r.last_seen,
            available: r.available,
        }
    }
}

/// Wire view of a `Session` (spec §6: current-session-for-resource /
/// status update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: SessionId,
    pub process_id: ctrlplane_core::ProcessId,
    pub resource_id: Option<ResourceId>,
    pub status: SessionStatus,
    pub parameters: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionSummary {
    fn from(s: &Session) -> Self {
        SessionSummary {
            id: s.id,
            process_id: s.process_id,
            resource_id: s.resource_id,
            status: s.status,
            parameters: s.parameters.clone(),
            created_at: s.created_at,
        }
    }
}

/// Wire view of a `WorkItem` (spec §6: claim-next-item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItemSummary {
    pub id: WorkItemId,
    pub workqueue_id: ctrlplane_core::WorkqueueId,
    pub data: serde_json::Value,
    pub reference: String,
    pub status: WorkItemStatus,
}

impl From<&WorkItem> for WorkItemSummary {
    fn from(w: &WorkItem) -> Self {
        WorkItemSummary {
            id: w.id,
            workqueue_id: w.workqueue_id,
            data: w.data.clone(),
            reference: w.reference.clone(),
            status: w.status,
        }
    }
}

/// Wire view of an `AuditLog` entry (spec §6: audit-log write echoes the
/// created entry back to the caller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogSummary {
    pub id: ctrlplane_core::AuditLogId,
    pub message: String,
    pub level: ctrlplane_core::AuditLevel,
    pub event_timestamp: DateTime<Utc>,
}

impl From<&AuditLog> for AuditLogSummary {
    fn from(log: &AuditLog) -> Self {
        AuditLogSummary {
            id: log.id,
            message: log.message.clone(),
            level: log.level,
            event_timestamp: log.event_timestamp,
        }
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
