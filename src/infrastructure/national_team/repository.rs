//! Storage-backed national team repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::storage::{Storage, StorageEntity};
use crate::domain::{DomainError, NationalTeamEntity, NationalTeamId, NationalTeamRepository};

/// Storage-backed implementation of NationalTeamRepository
#[derive(Debug)]
pub struct StorageNationalTeamRepository {
    storage: Arc<dyn Storage<NationalTeamEntity>>,
}

impl StorageNationalTeamRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<NationalTeamEntity>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl NationalTeamRepository for StorageNationalTeamRepository {
    /// Inserts the document; a taken id surfaces as [`DomainError::Conflict`]
    async fn save(&self, entity: NationalTeamEntity) -> Result<NationalTeamEntity, DomainError> {
        self.storage.create(entity.next_version()).await
    }

    async fn find_by_nationalteam_id(
        &self,
        id: NationalTeamId,
    ) -> Result<Option<NationalTeamEntity>, DomainError> {
        self.storage.get(&id).await
    }

    async fn delete(&self, entity: &NationalTeamEntity) -> Result<(), DomainError> {
        let removed = self.storage.delete(&entity.key()).await?;

        if !removed {
            debug!(nationalteam_id = %entity.nationalteam_id(), "Document already gone");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;

    fn create_repo() -> StorageNationalTeamRepository {
        let storage = Arc::new(InMemoryStorage::<NationalTeamEntity>::new());
        StorageNationalTeamRepository::new(storage)
    }

    fn id(value: i32) -> NationalTeamId {
        NationalTeamId::new(value).unwrap()
    }

    fn create_entity(value: i32, name: &str) -> NationalTeamEntity {
        NationalTeamEntity::new(id(value), name, "UEFA")
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = create_repo();

        let saved = repo.save(create_entity(1, "Sweden")).await.unwrap();
        assert_eq!(saved.version(), 1);

        let found = repo.find_by_nationalteam_id(id(1)).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn test_save_duplicate_new_entity_conflicts() {
        let repo = create_repo();

        repo.save(create_entity(1, "Sweden")).await.unwrap();
        let result = repo.save(create_entity(1, "Norway")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_save_never_overwrites() {
        let repo = create_repo();

        let saved = repo.save(create_entity(1, "Sweden")).await.unwrap();
        let result = repo.save(saved).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        let found = repo.find_by_nationalteam_id(id(1)).await.unwrap().unwrap();
        assert_eq!(found.version(), 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = create_repo();

        assert!(repo.find_by_nationalteam_id(id(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = create_repo();

        let saved = repo.save(create_entity(1, "Sweden")).await.unwrap();
        repo.delete(&saved).await.unwrap();

        assert!(repo.find_by_nationalteam_id(id(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_twice_is_ok() {
        let repo = create_repo();

        let saved = repo.save(create_entity(1, "Sweden")).await.unwrap();
        repo.delete(&saved).await.unwrap();

        assert!(repo.delete(&saved).await.is_ok());
    }
}
