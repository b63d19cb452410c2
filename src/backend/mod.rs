//! Storage backends the ledger persists into.
//!
//! A backend is a synchronous string key-value capability in the shape of
//! the browser's `localStorage`: [`StorageBackend::get_item`] and
//! [`StorageBackend::set_item`]. Handles are shared, so both methods take
//! `&self` and implementations use interior mutability.
//!
//! Two implementations ship with the crate:
//! - [`MemoryStorage`], a process-local map with an optional byte quota
//! - [`FileStorage`], a single JSON file written through on every set

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not a string map: {0}")]
    Corrupt(#[source] serde_json::Error),
}

pub trait StorageBackend {
    /// Returns the value stored under `key`, or `None` if nothing is.
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError>;
}
