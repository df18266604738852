//! Rollcall - event check-in service
//!
//! A single-page check-in widget backed by a small domain core:
//! - attendee registration with case-insensitive duplicate detection
//! - per-team tallies kept consistent with the roster
//! - progress toward a fixed capacity, with a celebration when it fills
//! - persistence through a pluggable key-value store

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use infrastructure::checkin::{CheckInService, LoggingObserver};
use infrastructure::storage::{StorageFactory, StorageType};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_type = match StorageType::from_str(&config.storage.backend) {
        Some(storage_type) => storage_type,
        None => {
            warn!(
                "Unknown storage backend '{}', defaulting to file",
                config.storage.backend
            );
            StorageType::File
        }
    };

    info!("Storage backend: {:?}", storage_type);

    let store = StorageFactory::create(storage_type, &config.storage.path)?;

    let service = CheckInService::load(store, config.event.capacity)
        .await?
        .with_observer(Arc::new(LoggingObserver));

    Ok(AppState::new(Arc::new(service)))
}
