//! Storage backend selection

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

use super::{FileKeyValueStore, InMemoryKeyValueStore};

/// Available storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    InMemory,
    File,
}

impl StorageType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "in_memory" | "in-memory" => Some(Self::InMemory),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// Creates key-value stores from configuration
pub struct StorageFactory;

impl StorageFactory {
    pub fn create(
        storage_type: StorageType,
        path: &str,
    ) -> Result<Arc<dyn KeyValueStore>, DomainError> {
        match storage_type {
            StorageType::InMemory => Ok(Arc::new(InMemoryKeyValueStore::new())),
            StorageType::File => Ok(Arc::new(FileKeyValueStore::new(path)?)),
        }
    }
}
