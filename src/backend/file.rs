use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use super::{BackendError, StorageBackend};

/// Backend persisting every item in one JSON object on disk
/// (`{"key": "value", ...}`).
///
/// The file is re-read on every call and rewritten on every set, so two
/// instances pointing at the same path observe each other's writes. A
/// missing file reads as empty and is created by the first set.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_owned(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> Result<BTreeMap<String, String>, BackendError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(BackendError::Corrupt)
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), BackendError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_vec_pretty(items).map_err(io::Error::from)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.read_items()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let mut items = self.read_items()?;
        items.insert(key.to_owned(), value.to_owned());
        self.write_items(&items)
    }
}
