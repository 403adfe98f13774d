//! National team service for create, read and delete

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tracing::{debug, info, warn};

use super::mapper::NationalTeamMapper;
use crate::domain::{
    DomainError, NationalTeam, NationalTeamId, NationalTeamRepository, ServiceAddressProvider,
};

/// National team service over a repository
pub struct NationalTeamService<R: NationalTeamRepository> {
    repository: Arc<R>,
    mapper: NationalTeamMapper,
    address_provider: Arc<dyn ServiceAddressProvider>,
}

impl<R: NationalTeamRepository> std::fmt::Debug for NationalTeamService<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NationalTeamService")
            .field("address_provider", &self.address_provider)
            .finish()
    }
}

impl<R: NationalTeamRepository + 'static> NationalTeamService<R> {
    /// Create a new national team service
    pub fn new(
        repository: Arc<R>,
        mapper: NationalTeamMapper,
        address_provider: Arc<dyn ServiceAddressProvider>,
    ) -> Self {
        Self {
            repository,
            mapper,
            address_provider,
        }
    }

    /// Create a national team, resolving once the document is stored
    pub async fn create_national_team(&self, body: NationalTeam) -> Result<NationalTeam, DomainError> {
        let id = parse_id(body.national_team_id)?;
        info!(nationalteam_id = %id, name = %body.name, "Creating national team");

        let entity = self.mapper.api_to_entity(id, &body);

        let saved = self.repository.save(entity).await.map_err(|e| match e {
            DomainError::Conflict { .. } => {
                warn!(nationalteam_id = %id, "National team already exists");
                DomainError::invalid_input(format!("Duplicate key, National Team Id: {}", id))
            }
            other => other,
        })?;

        Ok(self.mapper.entity_to_api(&saved))
    }

    /// Look up a national team.
    ///
    /// The id is checked before anything else and an invalid one fails right
    /// away. The returned future does no work until it is polled.
    pub fn get_national_team(
        &self,
        nationalteam_id: i32,
    ) -> Result<BoxFuture<'static, Result<NationalTeam, DomainError>>, DomainError> {
        let id = parse_id(nationalteam_id)?;

        let repository = Arc::clone(&self.repository);
        let mapper = self.mapper;
        let address_provider = Arc::clone(&self.address_provider);

        Ok(async move {
            debug!(nationalteam_id = %id, "Looking up national team");

            let entity = repository.find_by_nationalteam_id(id).await?.ok_or_else(|| {
                DomainError::not_found(format!(
                    "No national team found for nationalteamId: {}",
                    id
                ))
            })?;

            let team = mapper
                .entity_to_api(&entity)
                .with_service_address(address_provider.service_address());

            Ok(team)
        }
        .boxed())
    }

    /// Delete a national team if it exists
    pub async fn delete_national_team(&self, nationalteam_id: i32) -> Result<(), DomainError> {
        let id = parse_id(nationalteam_id)?;
        debug!(nationalteam_id = %id, "Trying to delete national team");

        match self.repository.find_by_nationalteam_id(id).await? {
            Some(entity) => {
                self.repository.delete(&entity).await?;
                info!(nationalteam_id = %id, "Deleted national team");
            }
            None => debug!(nationalteam_id = %id, "No national team to delete"),
        }

        Ok(())
    }
}

fn parse_id(id: i32) -> Result<NationalTeamId, DomainError> {
    NationalTeamId::new(id).map_err(|e| DomainError::invalid_input(e.to_string()))
}
