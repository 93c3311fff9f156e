// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured logging setup (SPEC_FULL §B), matching the teacher's
//! `tracing` + `tracing-subscriber` env-filter wiring.

use tracing_subscriber::EnvFilter;

/// Initialize the global `tracing` subscriber. Respects `RUST_LOG`,
/// defaulting to `info` for this crate's dependents when unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}
