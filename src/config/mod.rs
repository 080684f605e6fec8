//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, LogFormat, LoggingConfig, ServerConfig, StorageBackend, StorageConfig,
};
