use super::AccountDocument;
use crate::backend::StorageBackend;
use crate::error::Result;

/// Last block each account's notifications were checked up to.
///
/// Block numbers are stored as given; nothing rejects a negative one.
pub struct BlockMarkersStore<'a, B: StorageBackend + ?Sized> {
    backend: &'a B,
    key: String,
}

impl<'a, B: StorageBackend + ?Sized> BlockMarkersStore<'a, B> {
    pub fn new(backend: &'a B, key: String) -> Self {
        Self { backend, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn save(&self, block: i64, account: &str) -> Result<()> {
        let mut document = AccountDocument::load(self.backend, &self.key)?;
        document.set(account, &block)?;
        document.store()
    }

    /// `0` if nothing has been saved for `account`.
    pub fn get(&self, account: &str) -> Result<i64> {
        AccountDocument::load(self.backend, &self.key)?.entry(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStorage;
    use crate::Error;

    #[test]
    fn test_default_is_zero() {
        let storage = MemoryStorage::new();
        let store = BlockMarkersStore::new(&storage, "blocks".to_string());
        assert_eq!(store.get("a").unwrap(), 0);
    }

    #[test]
    fn test_round_trip_leaves_others_alone() {
        let storage = MemoryStorage::new();
        let store = BlockMarkersStore::new(&storage, "blocks".to_string());
        store.save(7, "other").unwrap();
        store.save(42, "acct1").unwrap();

        assert_eq!(store.get("acct1").unwrap(), 42);
        assert_eq!(store.get("other").unwrap(), 7);
        assert_eq!(store.get("acct2").unwrap(), 0);
    }

    #[test]
    fn test_negative_block_is_stored() {
        let storage = MemoryStorage::new();
        let store = BlockMarkersStore::new(&storage, "blocks".to_string());
        store.save(-5, "a").unwrap();
        assert_eq!(store.get("a").unwrap(), -5);
    }

    #[test]
    fn test_fractional_block_is_parse_error() {
        let storage = MemoryStorage::new();
        storage.set_item("blocks", r#"{"a":1.5}"#).unwrap();
        let store = BlockMarkersStore::new(&storage, "blocks".to_string());
        assert!(matches!(store.get("a"), Err(Error::Parse { .. })));
    }
}
