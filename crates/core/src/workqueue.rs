// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workqueue entity: a named container of work items (spec §3).

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a workqueue.
    pub struct WorkqueueId("wque");
}

/// A named FIFO of [`WorkItem`](crate::workitem::WorkItem)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workqueue {
    pub id: WorkqueueId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub enabled: bool,
    #[serde(default)]
    pub deleted: bool,
}

crate::builder! {
    pub struct WorkqueueBuilder => Workqueue {
        into {
            name: String = "default",
            description: String = "",
        }
        set {
            enabled: bool = true,
            deleted: bool = false,
        }
        computed {
            id: WorkqueueId = WorkqueueId::new(),
        }
    }
}

#[cfg(test)]
#[path = "workqueue_tests.rs"]
mod tests;
