// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire-level error classification (spec §6, §7): the stable outcome
//! labels a façade maps `ctrlplane_core::CoreError` onto before putting it
//! on the wire, without needing to know the core's internal variant names.

use ctrlplane_core::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Gone,
    InvalidTransition,
    Invalid,
    /// Claim contention surfaced after exhausting in-process retries (spec
    /// §7: "service busy, retry").
    Busy,
    Unauthorized,
    Internal,
}

impl From<&CoreError> for ErrorKind {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => ErrorKind::NotFound,
            CoreError::Gone { .. } => ErrorKind::Gone,
            CoreError::InvalidTransition { .. } => ErrorKind::InvalidTransition,
            CoreError::Invalid { .. } => ErrorKind::Invalid,
            CoreError::Contended(_) => ErrorKind::Busy,
            CoreError::Unauthorized(_) => ErrorKind::Unauthorized,
            CoreError::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
