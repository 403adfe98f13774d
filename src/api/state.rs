//! Application state for shared services

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::domain::{DomainError, NationalTeam, NationalTeamRepository, ServiceAddresses};
use crate::infrastructure::national_team::NationalTeamService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub national_team_service: Arc<dyn NationalTeamServiceTrait>,
    pub service_addresses: Arc<ServiceAddresses>,
}

/// Trait for national team service operations
#[async_trait::async_trait]
pub trait NationalTeamServiceTrait: Send + Sync {
    async fn create(&self, body: NationalTeam) -> Result<NationalTeam, DomainError>;
    fn get(
        &self,
        id: i32,
    ) -> Result<BoxFuture<'static, Result<NationalTeam, DomainError>>, DomainError>;
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: NationalTeamRepository + 'static> NationalTeamServiceTrait for NationalTeamService<R> {
    async fn create(&self, body: NationalTeam) -> Result<NationalTeam, DomainError> {
        NationalTeamService::create_national_team(self, body).await
    }

    fn get(
        &self,
        id: i32,
    ) -> Result<BoxFuture<'static, Result<NationalTeam, DomainError>>, DomainError> {
        NationalTeamService::get_national_team(self, id)
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        NationalTeamService::delete_national_team(self, id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        national_team_service: Arc<dyn NationalTeamServiceTrait>,
        service_addresses: Arc<ServiceAddresses>,
    ) -> Self {
        Self {
            national_team_service,
            service_addresses,
        }
    }
}
