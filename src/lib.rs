// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! In-memory `name=value` lists with the semantics of `setenv`, `getenv`
//! and `unsetenv`, typed accessors, and a thread-safe reuse pool. Nothing
//! here touches the real process environment.
//!
//! ```
//! use environ_rs::env::EnvList;
//!
//! let mut env = EnvList::new();
//! env.put("a", "1").put("b", "2").put("a", "9");
//! env.set("port", &8080_i32)?;
//!
//! assert_eq!(env.as_slice(), ["a=9", "b=2", "port=8080"]);
//! assert_eq!(env.get_int("port"), 8080);
//! # Ok::<(), environ_rs::error::EnvError>(())
//! ```
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!                         print / get / options
//!          +----------+----------+
//!                     v
//!        ,---------------------------,
//!        |          config           |
//!        | TOML + ENVIRON_* layered  |
//!        '-------------+-------------'
//!                      v
//!        ,---------------------------,
//!        |            env            |
//!        |  EnvList  Value  EnvPool  |
//!        '---------------------------'
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use env::{EnvList, EnvPool, PoolConfig, Value};
pub use error::{EnvError, EnvironError};
