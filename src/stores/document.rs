use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::backend::StorageBackend;
use crate::error::{Error, Result};

/// One `{ account: value }` JSON document under a single backend key.
///
/// Entries are held as raw JSON, so writing one account never re-encodes
/// (or loses fields of) another account's entry.
pub struct AccountDocument<'a, B: StorageBackend + ?Sized> {
    backend: &'a B,
    key: &'a str,
    entries: Map<String, Value>,
}

impl<'a, B: StorageBackend + ?Sized> AccountDocument<'a, B> {
    /// Reads the document under `key`. An absent or empty value is the
    /// empty document.
    pub fn load(backend: &'a B, key: &'a str) -> Result<Self> {
        let entries: Map<String, Value> = match backend.get_item(key)? {
            Some(text) if !text.is_empty() => {
                serde_json::from_str(&text).map_err(|source| Error::Parse {
                    key: key.to_owned(),
                    source,
                })?
            }
            _ => Map::new(),
        };
        debug!("loaded `{}` with {} account(s)", key, entries.len());
        Ok(Self {
            backend,
            key,
            entries,
        })
    }

    /// Decodes `account`'s entry, or `T::default()` when it is absent or
    /// `null`.
    pub fn entry<T>(&self, account: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.entries.get(account) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => T::deserialize(value).map_err(|source| Error::Parse {
                key: self.key.to_owned(),
                source,
            }),
        }
    }

    /// Replaces `account`'s entry wholesale.
    pub fn set<T: Serialize + ?Sized>(&mut self, account: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(Error::Serialize)?;
        self.entries.insert(account.to_owned(), value);
        Ok(())
    }

    /// Writes the whole document back, every account included.
    pub fn store(self) -> Result<()> {
        let text = serde_json::to_string(&self.entries).map_err(Error::Serialize)?;
        self.backend.set_item(self.key, &text)?;
        debug!("stored `{}` with {} account(s)", self.key, self.entries.len());
        Ok(())
    }
}
