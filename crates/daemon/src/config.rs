// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration (spec §6 configuration surface, SPEC_FULL §B).
//!
//! Loaded from a TOML file under `dirs::config_dir()` (overridable via
//! `CTRLPLANE_CONFIG_PATH`), then overlaid with `CTRLPLANE_*` environment
//! variables. Grounded in the teacher's `lifecycle::startup::Config::load`
//! fixed-path-then-env-override pattern.

use std::path::PathBuf;
use std::time::Duration;

use ctrlplane_engine::SchedulerConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "memory://ctrlplane";
const DEFAULT_SCHEDULER_INTERVAL_SECS: u64 = 10;
const DEFAULT_SCHEDULER_ERROR_BACKOFF_SECS: u64 = 30;
const DEFAULT_SCHEDULER_MAX_PARAMETER_LENGTH: usize = 1000;

/// Resolved daemon configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the persistent store (spec §6). The bundled
    /// engine keeps its state in memory, so this is carried through and
    /// logged but otherwise unused until a real repository backend exists.
    pub database_url: String,
    /// Whether the scheduler loop should run at all (spec §6).
    pub scheduler_enabled: bool,
    /// Tick period (spec §4.8).
    pub scheduler_interval: Duration,
    /// Sleep after an uncaught per-tick error before retrying (spec §4.8).
    pub scheduler_error_backoff: Duration,
    /// Maximum accepted length for `Trigger.parameters` (spec §4.7).
    pub scheduler_max_parameter_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            scheduler_enabled: true,
            scheduler_interval: Duration::from_secs(DEFAULT_SCHEDULER_INTERVAL_SECS),
            scheduler_error_backoff: Duration::from_secs(DEFAULT_SCHEDULER_ERROR_BACKOFF_SECS),
            scheduler_max_parameter_length: DEFAULT_SCHEDULER_MAX_PARAMETER_LENGTH,
        }
    }
}

impl Config {
    /// Load configuration for the user-level daemon: fixed TOML path under
    /// `dirs::config_dir()/ctrlplane/ctrlplane.toml` (or `CTRLPLANE_CONFIG_PATH`
    /// if set), overlaid with `CTRLPLANE_*` environment variables. Missing
    /// file and missing env vars both fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;
        let file_config = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(err) => return Err(ConfigError::Io(err)),
        };

        let mut config = Config {
            database_url: file_config.database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            scheduler_enabled: file_config.scheduler_enabled.unwrap_or(true),
            scheduler_interval: file_config
                .scheduler_interval
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_SCHEDULER_INTERVAL_SECS)),
            scheduler_error_backoff: file_config
                .scheduler_error_backoff
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(DEFAULT_SCHEDULER_ERROR_BACKOFF_SECS)),
            scheduler_max_parameter_length: file_config
                .scheduler_max_parameter_length
                .unwrap_or(DEFAULT_SCHEDULER_MAX_PARAMETER_LENGTH),
        };

        config.overlay_env()?;
        Ok(config)
    }

    fn overlay_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var("CTRLPLANE_DATABASE_URL") {
            self.database_url = value;
        }
        if let Some(value) = parse_env_bool("CTRLPLANE_SCHEDULER_ENABLED")? {
            self.scheduler_enabled = value;
        }
        if let Some(value) = parse_env_secs("CTRLPLANE_SCHEDULER_INTERVAL")? {
            self.scheduler_interval = value;
        }
        if let Some(value) = parse_env_secs("CTRLPLANE_SCHEDULER_ERROR_BACKOFF")? {
            self.scheduler_error_backoff = value;
        }
        if let Some(value) = parse_env_usize("CTRLPLANE_SCHEDULER_MAX_PARAMETER_LENGTH")? {
            self.scheduler_max_parameter_length = value;
        }
        Ok(())
    }

    /// Project onto the engine's tuning knobs. The fixed constants (stale
    /// timeout, dangling timeout, claim retries/backoff) are not
    /// configurable from outside the engine (spec §9).
    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            interval: self.scheduler_interval,
            error_backoff: self.scheduler_error_backoff,
            max_parameter_length: self.scheduler_max_parameter_length,
            ..SchedulerConfig::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    database_url: Option<String>,
    scheduler_enabled: Option<bool>,
    scheduler_interval: Option<u64>,
    scheduler_error_backoff: Option<u64>,
    scheduler_max_parameter_length: Option<usize>,
}

fn config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = std::env::var("CTRLPLANE_CONFIG_PATH") {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_dir.join("ctrlplane").join("ctrlplane.toml"))
}

fn parse_env_bool(var: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.parse::<bool>().map(Some).map_err(|_| ConfigError::InvalidEnvValue(var.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

fn parse_env_secs(var: &str) -> Result<Option<Duration>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| ConfigError::InvalidEnvValue(var.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

fn parse_env_usize(var: &str) -> Result<Option<usize>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.parse::<usize>().map(Some).map_err(|_| ConfigError::InvalidEnvValue(var.to_string(), raw)),
        Err(_) => Ok(None),
    }
}

/// Errors loading daemon configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a config directory")]
    NoConfigDir,

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {0}: {1}")]
    InvalidEnvValue(String, String),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
