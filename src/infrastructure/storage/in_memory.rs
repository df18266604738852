//! In-memory key-value store
//!
//! Useful for testing and development. Data is lost when the process
//! terminates.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::storage::KeyValueStore;

/// Thread-safe in-memory key-value store
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
