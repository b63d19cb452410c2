//! Store configuration: the key namespace and the per-account notification
//! limit.

use std::env;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_KEY_PREFIX: &str = "0x-launch-kit-frontend.";
pub const LIMIT_NUMBER_OF_NOTIFICATIONS: usize = 20;

pub const PREFIX_ENV: &str = "NOTICE_LEDGER_PREFIX";
pub const LIMIT_ENV: &str = "NOTICE_LEDGER_LIMIT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got `{value}`")]
    InvalidLimit { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Prepended to every document key so the ledger can share a backend
    /// with unrelated data.
    pub key_prefix: String,
    /// Records kept per account; older ones are dropped on save.
    pub notification_limit: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
            notification_limit: LIMIT_NUMBER_OF_NOTIFICATIONS,
        }
    }
}

impl StoreConfig {
    /// Defaults, overridden by `NOTICE_LEDGER_PREFIX` and
    /// `NOTICE_LEDGER_LIMIT` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(prefix) = lookup(PREFIX_ENV) {
            config.key_prefix = prefix;
        }
        if let Some(value) = lookup(LIMIT_ENV) {
            let limit = value.trim().parse::<usize>();
            config.notification_limit = limit.map_err(|_| ConfigError::InvalidLimit {
                var: LIMIT_ENV,
                value,
            })?;
        }
        Ok(config)
    }

    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.key_prefix, name)
    }
}
