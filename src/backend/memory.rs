use std::cell::RefCell;
use std::collections::HashMap;

use super::{BackendError, StorageBackend};

/// Process-local backend. Stands in for the browser's storage in tests and
/// for callers that only need the ledger for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    /// Upper bound on the summed byte length of all keys and values.
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any write that would push the total stored size over `quota`
    /// bytes, the way a browser rejects writes past its origin quota.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// A backend whose every call fails, as storage does when the host has
    /// it switched off.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Total bytes currently held, keys included.
    pub fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    fn check_enabled(&self) -> Result<(), BackendError> {
        if self.disabled {
            return Err(BackendError::Unavailable("storage is disabled".into()));
        }
        Ok(())
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.check_enabled()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        self.check_enabled()?;
        if let Some(quota) = self.quota {
            let replaced = self
                .items
                .borrow()
                .get(key)
                .map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(BackendError::QuotaExceeded { needed, quota });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
