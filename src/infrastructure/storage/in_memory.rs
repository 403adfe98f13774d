//! In-memory storage implementation

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Process-local document store keyed by [`StorageKey::storage_key`].
///
/// Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    documents: RwLock<HashMap<String, E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, E>>, DomainError> {
        self.documents
            .read()
            .map_err(|e| DomainError::storage(format!("In-memory store poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, E>>, DomainError> {
        self.documents
            .write()
            .map_err(|e| DomainError::storage(format!("In-memory store poisoned: {}", e)))
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        Ok(self.read()?.get(&key.storage_key()).cloned())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().storage_key();
        let mut documents = self.write()?;

        if documents.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Document '{}' already exists",
                key
            )));
        }

        documents.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.write()?.remove(&key.storage_key()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NationalTeamEntity, NationalTeamId};

    fn id(value: i32) -> NationalTeamId {
        NationalTeamId::new(value).unwrap()
    }

    fn entity(value: i32, name: &str) -> NationalTeamEntity {
        NationalTeamEntity::new(id(value), name, "UEFA")
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let storage = InMemoryStorage::<NationalTeamEntity>::new();
        let e = entity(1, "Sweden");

        storage.create(e.clone()).await.unwrap();

        assert_eq!(storage.get(&id(1)).await.unwrap(), Some(e));
        assert_eq!(storage.get(&id(2)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_conflict_keeps_first_document() {
        let storage = InMemoryStorage::<NationalTeamEntity>::new();

        storage.create(entity(1, "Sweden")).await.unwrap();
        let result = storage.create(entity(1, "Norway")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        let stored = storage.get(&id(1)).await.unwrap().unwrap();
        assert_eq!(stored.name(), "Sweden");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removed() {
        let storage = InMemoryStorage::<NationalTeamEntity>::new();

        storage.create(entity(1, "Sweden")).await.unwrap();

        assert!(storage.delete(&id(1)).await.unwrap());
        assert!(!storage.delete(&id(1)).await.unwrap());
        assert!(storage.get(&id(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_key_is_reusable_after_delete() {
        let storage = InMemoryStorage::<NationalTeamEntity>::new();

        storage.create(entity(4, "Ghana")).await.unwrap();
        storage.delete(&id(4)).await.unwrap();

        assert!(storage.create(entity(4, "Ghana")).await.is_ok());
    }
}
