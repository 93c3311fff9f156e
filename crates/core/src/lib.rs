// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ctrlplane-core: domain entities, value types, and error taxonomy for the
//! ctrlplane automation control plane.

pub mod macros;

pub mod audit;
pub mod capability;
pub mod clock;
pub mod credential;
pub mod error;
pub mod id;
pub mod process;
pub mod resource;
pub mod session;
pub mod trigger;
pub mod workitem;
pub mod workqueue;

pub use audit::{AuditLevel, AuditLog, AuditLogId, ExceptionInfo};
#[cfg(any(test, feature = "test-support"))]
pub use audit::AuditLogBuilder;
pub use capability::CapabilitySet;
pub use clock::{Clock, FakeClock, SystemClock};
pub use credential::{Credential, CredentialId};
#[cfg(any(test, feature = "test-support"))]
pub use credential::CredentialBuilder;
pub use error::{CoreError, CoreResult};
pub use id::{short, IdBuf};
pub use process::{Process, ProcessId, Target};
#[cfg(any(test, feature = "test-support"))]
pub use process::ProcessBuilder;
pub use resource::{Resource, ResourceId};
#[cfg(any(test, feature = "test-support"))]
pub use resource::ResourceBuilder;
pub use session::{Session, SessionId, SessionStatus};
#[cfg(any(test, feature = "test-support"))]
pub use session::SessionBuilder;
pub use trigger::{Trigger, TriggerId, TriggerKind};
#[cfg(any(test, feature = "test-support"))]
pub use trigger::TriggerBuilder;
pub use workitem::{WorkItem, WorkItemId, WorkItemStatus};
#[cfg(any(test, feature = "test-support"))]
pub use workitem::WorkItemBuilder;
pub use workqueue::{Workqueue, WorkqueueId};
#[cfg(any(test, feature = "test-support"))]
pub use workqueue::WorkqueueBuilder;
