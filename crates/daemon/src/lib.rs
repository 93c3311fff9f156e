// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automation control plane daemon: configuration loading, logging setup,
//! and the wiring that turns a [`ctrlplane_engine::Scheduler`] into a
//! long-running process.

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;
mod logging;

pub use config::{Config, ConfigError};
pub use logging::init_logging;

/// Re-exported so a future façade binary can depend on `ctrlplane-daemon`
/// alone for both process wiring and the wire DTOs it would marshal.
pub use ctrlplane_wire as wire;
