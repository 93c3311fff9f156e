// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process entity: a runnable definition (spec §3).

use crate::capability::CapabilitySet;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a process definition.
    pub struct ProcessId("proc");
}

/// What a session of this process should run: a target type plus an
/// opaque source reference. Interpreting `source` (repo URL, image tag,
/// script path, ...) is worker-side and out of scope for the core (spec §1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub kind: String,
    pub source: String,
}

impl Target {
    pub fn new(kind: impl Into<String>, source: impl Into<String>) -> Self {
        Self { kind: kind.into(), source: source.into() }
    }
}

/// A runnable automation definition.
///
/// Immutable target/requirements across a run: once a non-terminal
/// [`Session`](crate::session::Session) references this process, its
/// `target` must not change (spec §3). The core enforces this at the
/// repository layer (`ctrlplane-storage`) rather than via a DB constraint,
/// since there is no SQL schema in this workspace (spec §1 Non-goals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    /// Free-form description; not interpreted by the core.
    #[serde(default)]
    pub description: String,
    /// Raw requirements string (space/comma-separated capability tokens).
    pub requirements: String,
    pub target: Target,
    /// Optional named credential bundles this process's sessions may need.
    #[serde(default)]
    pub credential_names: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl Process {
    pub fn requirement_set(&self) -> CapabilitySet {
        CapabilitySet::parse(&self.requirements)
    }
}

crate::builder! {
    pub struct ProcessBuilder => Process {
        into {
            name: String = "nightly-report",
            description: String = "",
            requirements: String = "",
        }
        set {
            target: Target = Target::new("container", "registry/nightly-report:latest"),
            credential_names: Vec<String> = Vec::new(),
            deleted: bool = false,
        }
        computed {
            id: ProcessId = ProcessId::new(),
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
