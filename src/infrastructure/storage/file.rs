//! File-backed key-value store
//!
//! One file per key under a data directory. Writes use the temp→rename
//! pattern so a crash mid-write never leaves a partial entry behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

/// Key-value store persisting each entry as a JSON file on disk
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates the store, creating the data directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|e| {
            DomainError::storage(format!(
                "Failed to create data directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, path)
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let path = self.entry_path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let path = self.entry_path(key);

        Self::atomic_write(&path, value).map_err(|e| {
            DomainError::storage(format!("Failed to write '{}': {}", path.display(), e))
        })
    }
}
