//! National Team Service
//!
//! Core service of the composite architecture that owns national teams:
//! - Create, read and delete over HTTP
//! - Document storage in memory or in PostgreSQL (JSONB)
//! - Service address reporting for load-balanced deployments

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use config::StorageSettings;
use domain::{DomainError, NationalTeamEntity, ServiceAddressProvider};
use infrastructure::{
    national_team::{NationalTeamMapper, NationalTeamService, StorageNationalTeamRepository},
    service_util::ServiceUtil,
    storage::{PostgresConfig, StorageConfig, StorageFactory, StorageType},
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = storage_config(&config.storage)?;
    info!(
        storage = ?storage_config.storage_type(),
        table = %config.storage.table,
        "Initializing national team storage"
    );

    let storage =
        StorageFactory::create::<NationalTeamEntity>(&storage_config, &config.storage.table)
            .await?;
    let repository = Arc::new(StorageNationalTeamRepository::new(storage));

    let service_util = ServiceUtil::resolve(config.server.port).await?;
    let service_addresses = config
        .addresses
        .to_service_addresses(service_util.service_address());
    info!(
        service_address = %service_util.service_address(),
        "Service address resolved"
    );

    let service = NationalTeamService::new(
        repository,
        NationalTeamMapper::new(),
        Arc::new(service_util),
    );

    Ok(AppState::new(Arc::new(service), Arc::new(service_addresses)))
}

fn storage_config(settings: &StorageSettings) -> Result<StorageConfig, DomainError> {
    let storage_type = StorageType::parse(&settings.storage_type).ok_or_else(|| {
        DomainError::configuration(format!(
            "Unknown storage type '{}'",
            settings.storage_type
        ))
    })?;

    match storage_type {
        StorageType::InMemory => Ok(StorageConfig::in_memory()),
        StorageType::Postgres => {
            let url = settings.url.as_deref().ok_or_else(|| {
                DomainError::configuration("storage.url is required for postgres storage")
            })?;

            Ok(StorageConfig::postgres(
                PostgresConfig::new(url).with_max_connections(settings.max_connections),
            ))
        }
    }
}
