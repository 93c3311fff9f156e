// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ctrlplane-storage: the repository layer (spec §4.1) — an in-memory,
//! lock-protected implementation of per-entity CRUD plus the specialized
//! queries the engine needs, grouped under a unit of work.

pub mod repo;
pub mod store;
pub mod unit_of_work;

pub use repo::{
    AuditLogRepository, CredentialRepository, ProcessRepository, ResourceRepository,
    SessionRepository, TriggerRepository, WorkItemRepository, WorkqueueRepository,
};
pub use store::Store;
pub use unit_of_work::UnitOfWork;
