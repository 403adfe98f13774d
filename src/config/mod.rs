//! Application configuration

mod app_config;

pub use app_config::{
    AddressesConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig, StorageSettings,
};
