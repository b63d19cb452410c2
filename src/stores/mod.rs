//! Storage layer for the notification ledger. Provides storage for:
//! - Notification history per account ([`NotificationsStore`])
//! - Unread flags per account ([`UnreadFlagsStore`])
//! - Last checked block per account ([`BlockMarkersStore`])
//!
//! Each store owns one JSON document (`{ account: value }`) under its own
//! key. Nothing is cached: every call reads the document from the backend,
//! and every save writes all accounts back. Two writers interleaving on the
//! same key can lose updates; the last store wins.

mod blocks;
mod document;
mod notifications;
mod unread;

pub use blocks::BlockMarkersStore;
pub use document::AccountDocument;
pub use notifications::{sort_and_truncate, NotificationsStore};
pub use unread::UnreadFlagsStore;
