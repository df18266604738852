//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, EventConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig,
};
