// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AuditLog entity: an append-only structured event (spec §3).

use crate::session::SessionId;
use crate::workitem::WorkItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for an audit log entry.
    pub struct AuditLogId("aud-");
}

/// Severity of an audit event, mirroring standard logging levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

crate::simple_display! {
    AuditLevel {
        Debug => "debug",
        Info => "info",
        Warning => "warning",
        Error => "error",
        Critical => "critical",
    }
}

/// Exception details captured alongside an error-level event, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub exception_type: String,
    pub exception_message: String,
    pub traceback: String,
}

/// A single append-only event emitted by the engine (spec §3).
///
/// Never updated or deleted once written; only created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: AuditLogId,
    pub session_id: Option<SessionId>,
    pub workitem_id: Option<WorkItemId>,
    pub message: String,
    pub level: AuditLevel,
    pub logger_name: String,
    pub module: String,
    pub function_name: String,
    pub line_number: Option<u32>,
    pub exception: Option<ExceptionInfo>,
    /// Free-form structured payload, opaque to the core (mirrors the
    /// original's JSONB column).
    #[serde(default)]
    pub structured_data: serde_json::Value,
    pub event_timestamp: DateTime<Utc>,
}

crate::builder! {
    pub struct AuditLogBuilder => AuditLog {
        into {
            message: String = "",
            logger_name: String = "ctrlplane",
            module: String = "",
            function_name: String = "",
        }
        set {
            session_id: Option<SessionId> = None,
            workitem_id: Option<WorkItemId> = None,
            level: AuditLevel = AuditLevel::Info,
            line_number: Option<u32> = None,
            exception: Option<ExceptionInfo> = None,
            structured_data: serde_json::Value = serde_json::Value::Null,
            event_timestamp: DateTime<Utc> = Utc::now(),
        }
        computed {
            id: AuditLogId = AuditLogId::new(),
        }
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
