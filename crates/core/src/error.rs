// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy shared by the storage and engine layers.
//!
//! Mirrors spec §7: each repository/engine operation surfaces one of these
//! variants so callers (including a future HTTP façade) can map them to a
//! stable set of outcomes without inventing new cases per call site.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Target entity does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// Entity exists but is soft-deleted.
    #[error("{kind} {id} is gone")]
    Gone { kind: &'static str, id: String },

    /// State-machine transition is not allowed from the current state.
    #[error("invalid transition for {kind} {id}: {from} -> {to}")]
    InvalidTransition { kind: &'static str, id: String, from: String, to: String },

    /// Request-level validation failure (bad cron, parameters too long, etc).
    #[error("invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },

    /// A claim lost a race; caller should retry with backoff.
    #[error("contended: {0}")]
    Contended(String),

    /// Reserved for a future auth façade; the core never returns this itself.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Anything else. Logged, transaction rolled back.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        CoreError::NotFound { kind, id: id.into() }
    }

    pub fn gone(kind: &'static str, id: impl Into<String>) -> Self {
        CoreError::Gone { kind, id: id.into() }
    }

    pub fn invalid_transition(
        kind: &'static str,
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        CoreError::InvalidTransition { kind, id: id.into(), from: from.into(), to: to.into() }
    }

    pub fn invalid(kind: &'static str, message: impl Into<String>) -> Self {
        CoreError::Invalid { kind, message: message.into() }
    }

    /// True if a caller at the call site should retry in-process rather
    /// than surface the error (per spec §7, only `Contended` is retried
    /// inline; everything else is surfaced or rolled back to the next tick).
    pub fn is_contended(&self) -> bool {
        matches!(self, CoreError::Contended(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
