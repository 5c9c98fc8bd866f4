//! # Configuration
//!
//! Runtime settings read from `RESTAURANT_*` environment variables. Every variable is
//! optional; an unset or empty variable keeps its default.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `RESTAURANT_ADDR` | `127.0.0.1:5000` | HTTP listen address |
//! | `RESTAURANT_CHANNEL_CAPACITY` | `32` | Mailbox size of each actor, must be > 0 |
//! | `RESTAURANT_ID_STRATEGY` | `random` | `random` or `sequential` record ids |

use actor_framework::{RandomIds, SequentialIds, SharedIds};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub const ADDR_VAR: &str = "RESTAURANT_ADDR";
pub const CHANNEL_CAPACITY_VAR: &str = "RESTAURANT_CHANNEL_CAPACITY";
pub const ID_STRATEGY_VAR: &str = "RESTAURANT_ID_STRATEGY";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{var} is not a socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be an integer greater than 0, got {value}")]
    InvalidCapacity { var: &'static str, value: String },

    #[error("{var} must be one of random, sequential, got {value}")]
    InvalidIdStrategy { var: &'static str, value: String },
}

/// How new record identifiers are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// 32 hex digits, unpredictable.
    #[default]
    Random,
    /// `"1"`, `"2"`, ... shared by dishes and orders.
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub channel_capacity: usize,
    pub id_strategy: IdStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            channel_capacity: 32,
            id_strategy: IdStrategy::Random,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(addr) = value(ADDR_VAR) {
            config.addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr.clone(),
            })?;
        }

        if let Some(capacity) = value(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = capacity
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::InvalidCapacity {
                    var: CHANNEL_CAPACITY_VAR,
                    value: capacity.clone(),
                })?;
        }

        if let Some(strategy) = value(ID_STRATEGY_VAR) {
            config.id_strategy =
                strategy
                    .parse()
                    .map_err(|_| ConfigError::InvalidIdStrategy {
                        var: ID_STRATEGY_VAR,
                        value: strategy.clone(),
                    })?;
        }

        Ok(config)
    }

    /// A fresh id source for the configured strategy.
    pub fn ids(&self) -> SharedIds {
        match self.id_strategy {
            IdStrategy::Random => Arc::new(RandomIds),
            IdStrategy::Sequential => Arc::new(SequentialIds::new()),
        }
    }
}
