// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::soft_delete_repository;
use ctrlplane_core::{Credential, CredentialId};

soft_delete_repository!(CredentialRepository, Credential, CredentialId, credentials, "Credential");

impl CredentialRepository {
    pub fn find_by_name(&self, name: &str) -> Option<Credential> {
        self.store.inner.read().credentials.values().find(|c| c.name == name).cloned()
    }
}

#[cfg(test)]
#[path = "credential_tests.rs"]
mod tests;
