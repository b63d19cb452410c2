pub mod backend;
pub mod config;
mod csv_utils;
mod dto;
mod error;
mod runner;
mod store;
pub mod stores;

pub use backend::{BackendError, FileStorage, MemoryStorage, StorageBackend};
pub use config::{ConfigError, StoreConfig};
pub use dto::{Notification, NotificationKind, NotificationRow, TxHandle};
pub use error::{Error, Result};
pub use runner::{run, Command, USAGE};
pub use store::AccountKeyedStore;
