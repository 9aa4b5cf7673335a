// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PoolConfig (env::pool), EnvConfig
//! EnvConfig.entries: ordered ["NAME=VALUE", ...]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::EnvList;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Write the log file as JSON lines.
    pub json_log: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            json_log: false,
        }
    }
}

/// Seed entries for the environment list built by the binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// `NAME=VALUE` assignments, applied in order.
    pub entries: Vec<String>,
}

impl EnvConfig {
    /// Checks that every entry is a `NAME=VALUE` assignment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first malformed entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.entries {
            split_assignment(entry).map_err(|message| ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "entries".to_string(),
                message,
            })?;
        }
        Ok(())
    }

    /// Puts every entry into `env`, in order.
    pub fn apply(&self, env: &mut EnvList) {
        for (name, value) in self.entries.iter().filter_map(|e| e.split_once('=')) {
            env.put(name, value);
        }
    }
}

/// Splits `NAME=VALUE` at the first `=`.
///
/// # Errors
///
/// Returns a message if there is no `=` or the name is empty.
pub fn split_assignment(assignment: &str) -> Result<(&str, &str), String> {
    match assignment.split_once('=') {
        Some(("", _)) => Err(format!("entry '{assignment}' has an empty name")),
        Some(pair) => Ok(pair),
        None => Err(format!("entry '{assignment}' has no '='")),
    }
}
