use super::AccountDocument;
use crate::backend::StorageBackend;
use crate::error::Result;

/// "Has unread notifications" flag per account.
pub struct UnreadFlagsStore<'a, B: StorageBackend + ?Sized> {
    backend: &'a B,
    key: String,
}

impl<'a, B: StorageBackend + ?Sized> UnreadFlagsStore<'a, B> {
    pub fn new(backend: &'a B, key: String) -> Self {
        Self { backend, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, has_unread: bool, account: &str) -> Result<()> {
        let mut document = AccountDocument::load(self.backend, &self.key)?;
        document.set(account, &has_unread)?;
        document.store()
    }

    /// `false` if nothing has been saved for `account`. A stored value that
    /// is not a boolean is a parse error, even a falsy one like `0`.
    pub fn get(&self, account: &str) -> Result<bool> {
        AccountDocument::load(self.backend, &self.key)?.entry(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStorage;
    use crate::Error;

    #[test]
    fn test_default_is_false() {
        let storage = MemoryStorage::new();
        let store = UnreadFlagsStore::new(&storage, "flags".to_string());
        assert!(!store.get("a").unwrap());
    }

    #[test]
    fn test_save_is_idempotent() {
        let storage = MemoryStorage::new();
        let store = UnreadFlagsStore::new(&storage, "flags".to_string());

        store.save(true, "a").unwrap();
        let once = storage.get_item("flags").unwrap();
        store.save(true, "a").unwrap();
        let twice = storage.get_item("flags").unwrap();

        assert_eq!(once, twice);
        assert!(store.get("a").unwrap());
    }

    #[test]
    fn test_flags_are_per_account() {
        let storage = MemoryStorage::new();
        let store = UnreadFlagsStore::new(&storage, "flags".to_string());
        store.save(true, "a").unwrap();
        store.save(false, "b").unwrap();
        store.save(false, "a").unwrap();

        assert!(!store.get("a").unwrap());
        assert!(!store.get("b").unwrap());
        assert_eq!(
            storage.get_item("flags").unwrap().as_deref(),
            Some(r#"{"a":false,"b":false}"#)
        );
    }

    #[test]
    fn test_non_boolean_flag_is_parse_error() {
        let storage = MemoryStorage::new();
        storage.set_item("flags", r#"{"a":0,"b":null}"#).unwrap();
        let store = UnreadFlagsStore::new(&storage, "flags".to_string());

        assert!(matches!(store.get("a"), Err(Error::Parse { .. })));
        assert!(!store.get("b").unwrap());
    }
}
