// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response payloads for the interfaces named in spec §6. One variant per
//! interface plus a shared `Error` variant a façade returns for any
//! `CoreError` it catches.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::types::{AuditLogSummary, ResourceSummary, SessionSummary, WorkItemSummary};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// `POST /resources`, `PUT /resources/{id}/ping` (enroll / keep-alive).
    Resource { resource: ResourceSummary },

    /// `GET /sessions/by_resource_id/{id}`: empty when none is attached.
    Session { session: Option<SessionSummary> },

    /// `PUT /sessions/{id}/status`.
    SessionUpdated { session: SessionSummary },

    /// `GET /workqueues/{id}/next_item`: empty when the queue has nothing
    /// claimable.
    WorkItem { item: Option<WorkItemSummary> },

    /// `POST /audit-logs`.
    AuditLog { log: AuditLogSummary },

    /// Any `CoreError` the façade maps onto a stable wire outcome (spec §7).
    Error { kind: ErrorKind, message: String },
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
