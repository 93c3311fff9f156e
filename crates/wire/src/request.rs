// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request bodies for the three mutating interfaces named in spec §6 that
//! take more than a path parameter. `ResourceId` path parameters and the
//! parameterless claim-next-item call don't need a body type.

use ctrlplane_core::{AuditLevel, ExceptionInfo, SessionId, SessionStatus, WorkItemId};
use serde::{Deserialize, Serialize};

/// `POST /resources` (spec §6, core §4.2 `enroll`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollResourceRequest {
    pub fqdn: String,
    pub name: String,
    #[serde(default)]
    pub capabilities: String,
}

/// `PUT /sessions/{id}/status` (spec §6, core §4.3 `update_status`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSessionStatusRequest {
    pub session_id: SessionId,
    pub status: SessionStatus,
}

/// `POST /audit-logs` (spec §6): append-only, no update/delete counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteAuditLogRequest {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub workitem_id: Option<WorkItemId>,
    pub message: String,
    #[serde(default = "default_level")]
    pub level: AuditLevel,
    #[serde(default)]
    pub logger_name: String,
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub function_name: String,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub exception: Option<ExceptionInfo>,
    #[serde(default)]
    pub structured_data: serde_json::Value,
}

fn default_level() -> AuditLevel {
    AuditLevel::Info
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
