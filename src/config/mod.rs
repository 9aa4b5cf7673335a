// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. environ.toml (cwd, optional)
//! 3. --ini files
//! 4. ENVIRON_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! ENVIRON_GLOBAL__LOG_LEVEL=4          → global.log_level = 4
//! ENVIRON_POOL__CAPACITY=16            → pool.capacity = 16
//! ENVIRON_POOL__RESET_ON_ACQUIRE=false → pool.reset_on_acquire = false
//! ENVIRON_ENV__ENTRIES="A=1 B=2"       → env.entries = ["A=1", "B=2"]
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! log_level = 4
//!
//! [pool]
//! capacity = 16
//!
//! [env]
//! entries = ["HOME=/home/user", "DEBUG=true"]
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::env::PoolConfig;
use crate::error::{EnvironResult, Result};

use loader::ConfigLoader;
use types::{EnvConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Reuse pool settings.
    pub pool: PoolConfig,
    /// Seed entries.
    pub env: EnvConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use environ_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("environ.toml")
    ///     .with_env_prefix("ENVIRON")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an `env.entries` item is not a `NAME=VALUE` pair.
    pub fn validate(&self) -> EnvironResult<()> {
        self.env.validate()?;
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert("global.log_level".to_string(), self.global.log_level.to_string());
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.to_string(),
        );
        options.insert(
            "global.log_file".to_string(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.json_log".to_string(), self.global.json_log.to_string());
        options.insert("pool.capacity".to_string(), self.pool.capacity.to_string());
        options.insert(
            "pool.reset_on_acquire".to_string(),
            self.pool.reset_on_acquire.to_string(),
        );
        options.insert("env.entries".to_string(), self.env.entries.join(" "));

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
