//! National team repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{NationalTeamEntity, NationalTeamId};
use crate::domain::DomainError;

/// Repository for national team documents
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NationalTeamRepository: Send + Sync {
    /// Persists an entity.
    ///
    /// A new entity whose id is already stored fails with
    /// [`DomainError::Conflict`].
    async fn save(&self, entity: NationalTeamEntity) -> Result<NationalTeamEntity, DomainError>;

    /// Finds the entity with the given national team id
    async fn find_by_nationalteam_id(
        &self,
        id: NationalTeamId,
    ) -> Result<Option<NationalTeamEntity>, DomainError>;

    /// Removes the given entity
    async fn delete(&self, entity: &NationalTeamEntity) -> Result<(), DomainError>;
}
