// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reuse pool for environment lists.
//!
//! # Architecture
//!
//! ```text
//! EnvPool
//! free list: bounded flume channel (capacity = PoolConfig::capacity)
//!
//! acquire(): try_recv() --> recycled (cleared if reset_on_acquire)
//!            empty      --> EnvList::new()
//! release(): try_send() --> idle in pool
//!            full       --> dropped
//!
//! Shared pool: EnvPool::shared() via OnceLock, backs new_env()/free()
//! ```
//!
//! Checkout moves the list out of the pool, so no two callers ever hold the
//! same instance. Neither operation blocks.

use std::fmt;
use std::sync::OnceLock;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::list::EnvList;

/// Default number of idle lists kept by a pool.
pub const DEFAULT_CAPACITY: usize = 64;

static SHARED: OnceLock<EnvPool> = OnceLock::new();

/// Pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// Maximum number of idle lists; released lists beyond this are dropped.
    /// Zero disables pooling.
    #[builder(setters(name = with_capacity), default = DEFAULT_CAPACITY)]
    pub capacity: usize,
    /// Clear recycled lists when they are handed out.
    ///
    /// When disabled, a recycled list keeps whatever its previous owner left
    /// in it.
    #[builder(setters(name = with_reset_on_acquire), default = true)]
    pub reset_on_acquire: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A thread-safe free list of [`EnvList`] instances.
pub struct EnvPool {
    sender: flume::Sender<EnvList>,
    receiver: flume::Receiver<EnvList>,
    config: PoolConfig,
}

impl Default for EnvPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvPool")
            .field("config", &self.config)
            .field("available", &self.available())
            .finish_non_exhaustive()
    }
}

impl EnvPool {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    #[must_use]
    pub fn with_config(config: PoolConfig) -> Self {
        let (sender, receiver) = flume::bounded(config.capacity);
        Self {
            sender,
            receiver,
            config,
        }
    }

    /// Returns the process-wide pool, creating it with default settings on
    /// first use.
    pub fn shared() -> &'static Self {
        SHARED.get_or_init(Self::new)
    }

    /// Initializes the process-wide pool with `config`.
    ///
    /// Returns `false` if the shared pool was already created, in which case
    /// its settings are left as they are.
    #[must_use = "a false return means the config was not applied"]
    pub fn init_shared(config: PoolConfig) -> bool {
        let mut initialized = false;
        SHARED.get_or_init(|| {
            initialized = true;
            Self::with_config(config)
        });
        initialized
    }

    /// Checks out a list, recycling an idle one when available.
    #[must_use]
    pub fn acquire(&self) -> EnvList {
        if let Ok(mut env) = self.receiver.try_recv() {
            if self.config.reset_on_acquire {
                env.clear();
            }
            tracing::debug!(len = env.len(), "reusing pooled env list");
            env
        } else {
            tracing::debug!("allocating new env list");
            EnvList::new()
        }
    }

    /// Returns a list to the pool. The list is dropped if the pool is full.
    pub fn release(&self, env: EnvList) {
        match self.sender.try_send(env) {
            Ok(()) => tracing::debug!(available = self.available(), "released env list"),
            Err(_) => tracing::debug!("env pool full, dropping env list"),
        }
    }

    /// Number of idle lists currently held.
    #[must_use]
    pub fn available(&self) -> usize {
        self.receiver.len()
    }

    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }
}

