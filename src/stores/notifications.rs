//! Per-account notification history.
//!
//! Each account's list is kept newest first and capped at the configured
//! limit. Missing timestamps count as the epoch, so they sink to the end.

use std::cmp::Reverse;

use log::trace;

use super::AccountDocument;
use crate::backend::StorageBackend;
use crate::dto::Notification;
use crate::error::Result;

pub struct NotificationsStore<'a, B: StorageBackend + ?Sized> {
    backend: &'a B,
    key: String,
    limit: usize,
}

impl<'a, B: StorageBackend + ?Sized> NotificationsStore<'a, B> {
    pub fn new(backend: &'a B, key: String, limit: usize) -> Self {
        Self {
            backend,
            key,
            limit,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces `account`'s history with `notifications`, sorted and
    /// truncated. The whole document is rewritten.
    pub fn save(&self, mut notifications: Vec<Notification>, account: &str) -> Result<()> {
        sort_and_truncate(&mut notifications, self.limit);
        let mut document = AccountDocument::load(self.backend, &self.key)?;
        document.set(account, &notifications)?;
        document.store()
    }

    /// Empty if nothing has been saved for `account`.
    pub fn get(&self, account: &str) -> Result<Vec<Notification>> {
        AccountDocument::load(self.backend, &self.key)?.entry(account)
    }
}

/// Newest first, stable for equal timestamps, at most `limit` long.
pub fn sort_and_truncate(notifications: &mut Vec<Notification>, limit: usize) {
    notifications.sort_by_key(|notification| Reverse(notification.sort_key()));
    if notifications.len() > limit {
        trace!(
            "dropping {} notification(s) over the limit of {}",
            notifications.len() - limit,
            limit
        );
        notifications.truncate(limit);
    }
}
