//! Storage trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::StorageEntity;

/// Keyed document store for one entity type.
///
/// Keys are unique: `create` must fail with [`DomainError::Conflict`] when a
/// document with the same key is already stored.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Inserts a document, returns a conflict if the key is taken
    async fn create(&self, entity: E) -> Result<E, DomainError>;

    /// Removes a document, returns false if nothing was stored under the key
    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError>;
}
