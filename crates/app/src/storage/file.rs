//! File-backed store

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// Single-file JSON store so a cart survives across CLI invocations.
///
/// The whole map is read and rewritten per operation. One storefront session
/// owns a store at a time, so no cross-process locking is attempted.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<FxHashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(error) => Err(error.into()),
        }
    }

    fn write_entries(&self, entries: &FxHashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value);

        self.write_entries(&entries)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;

        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }

        Ok(())
    }
}
