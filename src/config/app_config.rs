use config::builder::{ConfigBuilder, DefaultState};
use config::ConfigError;
use serde::Deserialize;

use crate::domain::ServiceAddresses;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageSettings,
    pub addresses: AddressesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Document store selection
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// `memory` or `postgres`
    #[serde(rename = "type")]
    pub storage_type: String,
    pub url: Option<String>,
    pub table: String,
    pub max_connections: u32,
}

/// Addresses of the collaborating services, all optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressesConfig {
    pub composite: Option<String>,
    pub player: Option<String>,
    pub nationality: Option<String>,
    pub team: Option<String>,
    pub league: Option<String>,
    pub national_team: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7004,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            storage_type: "memory".to_string(),
            url: None,
            table: "national_teams".to_string(),
            max_connections: 10,
        }
    }
}

impl AddressesConfig {
    /// Build the address book; an unset national team entry falls back to `own_address`
    pub fn to_service_addresses(&self, own_address: impl Into<String>) -> ServiceAddresses {
        ServiceAddresses::from_optional(
            self.composite.clone(),
            self.player.clone(),
            self.nationality.clone(),
            self.team.clone(),
            self.league.clone(),
            Some(
                self.national_team
                    .clone()
                    .unwrap_or_else(|| own_address.into()),
            ),
        )
    }
}

impl AppConfig {
    /// Load `config/default`, `config/local` and `APP__*` variables.
    ///
    /// Absent sources leave defaults in place; a value that does not parse is
    /// an error.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(Self::layered_sources())
    }

    fn layered_sources() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}
