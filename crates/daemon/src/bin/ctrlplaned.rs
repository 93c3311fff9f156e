// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Automation control plane daemon entry point: loads configuration, wires
//! up the scheduler loop, and runs until a shutdown signal arrives.

use anyhow::Context;
use ctrlplane_core::SystemClock;
use ctrlplane_daemon::{init_logging, Config};
use ctrlplane_engine::Scheduler;
use ctrlplane_storage::Store;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load().context("failed to load daemon configuration")?;
    tracing::info!(
        database_url = %config.database_url,
        scheduler_enabled = config.scheduler_enabled,
        interval_secs = config.scheduler_interval.as_secs(),
        "ctrlplaned starting"
    );

    if !config.scheduler_enabled {
        tracing::warn!("scheduler disabled via configuration, idling until shutdown signal");
        tokio::signal::ctrl_c().await.context("failed to listen for shutdown signal")?;
        return Ok(());
    }

    let store = Store::new();
    let scheduler = Scheduler::new(store, SystemClock, config.scheduler_config());

    let cancel = CancellationToken::new();
    let shutdown_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown signal received");
            shutdown_cancel.cancel();
        }
    });

    scheduler.run_loop(cancel).await;
    tracing::info!("ctrlplaned stopped");
    Ok(())
}
