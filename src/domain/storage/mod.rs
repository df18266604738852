//! Key-value persistence trait
//!
//! Check-in state persists as named entries in a small key-value store, each
//! holding a serialized JSON document. Backends live in the infrastructure
//! layer; the domain only sees this trait.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

/// Generic string key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync + Debug {
    /// Retrieves the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
