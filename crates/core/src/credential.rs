// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential entity: a named secret bundle (spec §3, SPEC_FULL §C.5).

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a credential.
    pub struct CredentialId("cred");
}

/// A named, soft-deletable secret bundle.
///
/// The bundle's contents are opaque to the core — encryption at rest and
/// access control belong to the auth façade this repository doesn't
/// implement (spec §6 Non-goals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: CredentialId,
    pub name: String,
    /// Opaque payload, never interpreted by the core.
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub deleted: bool,
}

crate::builder! {
    pub struct CredentialBuilder => Credential {
        into {
            name: String = "default",
        }
        set {
            data: serde_json::Value = serde_json::Value::Null,
            deleted: bool = false,
        }
        computed {
            id: CredentialId = CredentialId::new(),
        }
    }
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
