// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        EnvironError (~24 bytes)
//!               |
//!      +--------+--------+
//!      |        |        |
//!      v        v        v
//!     Env     Config     Io
//!     Box      Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Env     UnsupportedType, InvalidAssignment
//!   Config  InvalidValue
//! ```
//!
//! Typed getters on [`EnvList`](crate::env::EnvList) never fail: an
//! unparsable value reads as the type's default.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvironError`].
pub type EnvironResult<T> = std::result::Result<T, EnvironError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvironError {
    /// Environment list operation failed.
    #[error("env error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Writing a list or report failed.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvironError {
                fn from(err: $error) -> Self {
                    EnvironError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Env Errors ---

/// Environment list errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The value passed to `EnvList::set` has no string conversion.
    #[error("set {name}: value \"{type_name}\" is not supported")]
    UnsupportedType { name: String, type_name: String },

    /// A command-line assignment is not `NAME=VALUE`.
    #[error("invalid --set: {0}")]
    InvalidAssignment(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
