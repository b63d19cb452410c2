use crate::backend::StorageBackend;
use crate::config::StoreConfig;
use crate::dto::Notification;
use crate::error::Result;
use crate::stores::{BlockMarkersStore, NotificationsStore, UnreadFlagsStore};

const NOTIFICATIONS: &str = "notifications";
const HAS_UNREAD_NOTIFICATIONS: &str = "hasUnreadNotifications";
const LAST_BLOCK_CHECKED: &str = "lastBlockChecked";

/// Notification history, unread flags and last checked blocks, keyed by
/// account, persisted into a caller-owned [`StorageBackend`].
///
/// Every call reads from the backend; there is no state besides the
/// backend reference and the config.
pub struct AccountKeyedStore<'a, B: StorageBackend + ?Sized> {
    config: StoreConfig,
    notifications: NotificationsStore<'a, B>,
    unread: UnreadFlagsStore<'a, B>,
    blocks: BlockMarkersStore<'a, B>,
}

impl<'a, B: StorageBackend + ?Sized> AccountKeyedStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self::with_config(backend, StoreConfig::default())
    }

    pub fn with_config(backend: &'a B, config: StoreConfig) -> Self {
        Self {
            notifications: NotificationsStore::new(
                backend,
                config.key(NOTIFICATIONS),
                config.notification_limit,
            ),
            unread: UnreadFlagsStore::new(backend, config.key(HAS_UNREAD_NOTIFICATIONS)),
            blocks: BlockMarkersStore::new(backend, config.key(LAST_BLOCK_CHECKED)),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Replaces `account`'s history. The list is stored newest first and
    /// cut down to the configured limit.
    pub fn save_notifications(
        &self,
        notifications: Vec<Notification>,
        account: &str,
    ) -> Result<()> {
        self.notifications.save(notifications, account)
    }

    /// Transaction handles always come back as
    /// [`TxHandle::Settled`](crate::TxHandle::Settled).
    pub fn get_notifications(&self, account: &str) -> Result<Vec<Notification>> {
        self.notifications.get(account)
    }

    pub fn save_has_unread_notifications(&self, has_unread: bool, account: &str) -> Result<()> {
        self.unread.save(has_unread, account)
    }

    /// `false` when nothing is stored for `account` (or the entry is
    /// `null`). Any other non-boolean entry, `0` or `""` included, is an
    /// [`Error::Parse`](crate::Error::Parse) rather than a falsy default.
    pub fn get_has_unread_notifications(&self, account: &str) -> Result<bool> {
        self.unread.get(account)
    }

    pub fn save_last_block_checked(&self, block: i64, account: &str) -> Result<()> {
        self.blocks.save(block, account)
    }

    /// `0` when nothing is stored for `account` (or the entry is `null`). A
    /// non-integer entry is an [`Error::Parse`](crate::Error::Parse).
    pub fn get_last_block_checked(&self, account: &str) -> Result<i64> {
        self.blocks.get(account)
    }
}
