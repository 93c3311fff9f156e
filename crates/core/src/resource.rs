// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource entity: a worker machine (spec §3, §4.2).

use crate::capability::CapabilitySet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a worker resource.
    pub struct ResourceId("res-");
}

/// A worker machine that can execute sessions.
///
/// Invariants (spec §3): `deleted ⇒ ¬available`; at any instant at most one
/// non-terminal session references a given resource. The second invariant
/// is enforced by the dispatcher and session lifecycle service, not by this
/// type — `Resource` itself only carries the flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub fqdn: String,
    pub name: String,
    /// Raw capability string (space/comma-separated tokens).
    pub capabilities: String,
    pub last_seen: DateTime<Utc>,
    pub available: bool,
    pub deleted: bool,
}

impl Resource {
    pub fn capability_set(&self) -> CapabilitySet {
        CapabilitySet::parse(&self.capabilities)
    }

    /// True iff the resource has not pinged within `timeout` of `now`.
    pub fn is_stale(&self, now: DateTime<Utc>, timeout: chrono::Duration) -> bool {
        now.signed_duration_since(self.last_seen) > timeout
    }
}

crate::builder! {
    pub struct ResourceBuilder => Resource {
        into {
            fqdn: String = "worker-1.internal",
            name: String = "worker-1",
            capabilities: String = "",
        }
        set {
            available: bool = true,
            deleted: bool = false,
            last_seen: DateTime<Utc> = Utc::now(),
        }
        computed {
            id: ResourceId = ResourceId::new(),
        }
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
