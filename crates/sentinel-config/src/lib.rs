//! # sentinel-config
//!
//! Layered configuration loading for Sentinel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables listed in [`ENV_KEYS`] (`SENTINEL_` prefix, `__`
//!    as section separator)
//! 2. Working-directory `sentinel.toml`
//! 3. Built-in defaults
//!
//! With no file and none of those variables set, the defaults write
//! `results/seed42_verification.json` and log at `warn`.
//!
//! Any other `SENTINEL_*` variable is ignored. `SENTINEL_LOG` in particular
//! is the `tracing` filter, not a config key.

mod error;
mod log;
mod output;

pub use error::ConfigError;
pub use log::LogConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "SENTINEL_";

/// Variables (after the prefix) that map onto config keys.
pub const ENV_KEYS: &[&str] = &["output__results_dir", "output__file_name", "log__level"];

/// Project-local config file, resolved against the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sentinel.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SentinelConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl SentinelConfig {
    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on extraction failure and
    /// `ConfigError::InvalidValue` when validation rejects a field.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.output.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer extra
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Self::env_provider())
    }

    fn env_provider() -> Env {
        Env::prefixed(ENV_PREFIX).only(ENV_KEYS).split("__")
    }
}
