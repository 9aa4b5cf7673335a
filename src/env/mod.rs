// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment list management.
//!
//! # Architecture
//!
//! ```text
//! EnvList (Vec<String> of "name=value", insertion order)
//! Sources: EnvList::new(), new_env() (shared pool), from_entries()
//! Ops: index_of/contains/get/get_bool/get_int/get_float
//!      put/set/set_value/unset/print
//!
//! EnvPool (bounded flume channel used as a free list)
//! acquire() --> EnvList --> release()
//! ```
//!
//! - **Case-sensitive**: `A` and `AB` never collide, lookup matches `name=`
//! - **First match wins**: `put` replaces the first matching entry in place
//! - **Unset keeps the entry**: the value becomes `""`, length never shrinks

pub mod list;
pub mod pool;
pub mod value;


pub use list::EnvList;
pub use pool::{EnvPool, PoolConfig};
pub use value::{Value, parse_bool};

/// Checks out an environment list from the shared pool.
///
/// Whether a recycled list starts empty depends on the shared pool's
/// [`PoolConfig::reset_on_acquire`].
#[must_use]
pub fn new_env() -> EnvList {
    EnvPool::shared().acquire()
}

/// Returns an environment list to the shared pool.
pub fn free(env: EnvList) {
    EnvPool::shared().release(env);
}
