//! PostgreSQL document storage
//!
//! One table per entity type, shaped `(key, data JSONB)`. The primary key on
//! `key` is what turns a repeated insert into a conflict.

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

/// Connection settings for [`PostgresStorage`]
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
        }
    }

    pub fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }
}

/// SQL text for one document table, rendered once per storage
#[derive(Debug, Clone, PartialEq, Eq)]
struct Statements {
    create_table: String,
    select: String,
    insert: String,
    delete: String,
}

impl Statements {
    fn for_table(table: &str) -> Self {
        Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (key VARCHAR(255) PRIMARY KEY, data JSONB NOT NULL)"
            ),
            select: format!("SELECT data FROM {table} WHERE key = $1"),
            insert: format!("INSERT INTO {table} (key, data) VALUES ($1, $2)"),
            delete: format!("DELETE FROM {table} WHERE key = $1"),
        }
    }
}

pub struct PostgresStorage<E>
where
    E: StorageEntity,
{
    pool: PgPool,
    table: String,
    sql: Statements,
    _entity: PhantomData<E>,
}

impl<E> Debug for PostgresStorage<E>
where
    E: StorageEntity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresStorage")
            .field("table", &self.table)
            .finish()
    }
}

impl<E> PostgresStorage<E>
where
    E: StorageEntity,
{
    /// Open a pool against `config.url` and make sure `table` exists
    pub async fn connect(config: &PostgresConfig, table: &str) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))?;

        let storage = Self {
            pool,
            table: table.to_string(),
            sql: Statements::for_table(table),
            _entity: PhantomData,
        };

        sqlx::query(&storage.sql.create_table)
            .execute(&storage.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to create table '{}': {}", table, e))
            })?;

        Ok(storage)
    }
}

/// Map a failed insert: a primary key violation is a conflict, anything else
/// is a storage failure
fn insert_error(key: &str, error: sqlx::Error) -> DomainError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::conflict(format!("Document '{}' already exists", key))
        }
        _ => DomainError::storage(format!("Failed to insert document '{}': {}", key, error)),
    }
}

#[async_trait]
impl<E> Storage<E> for PostgresStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let row = sqlx::query(&self.sql.select)
            .bind(key.storage_key())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to read document: {}", e)))?;

        row.map(|row| {
            serde_json::from_value(row.get("data"))
                .map_err(|e| DomainError::storage(format!("Corrupt document: {}", e)))
        })
        .transpose()
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().storage_key();
        let data = serde_json::to_value(&entity)
            .map_err(|e| DomainError::storage(format!("Failed to encode document: {}", e)))?;

        sqlx::query(&self.sql.insert)
            .bind(&key)
            .bind(&data)
            .execute(&self.pool)
            .await
            .map_err(|e| insert_error(&key, e))?;

        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let result = sqlx::query(&self.sql.delete)
            .bind(key.storage_key())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete document: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::error::Error as StdError;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    /// Stand-in for a driver error carrying a chosen constraint kind
    #[derive(Debug)]
    struct DriverError {
        unique: bool,
    }

    impl std::fmt::Display for DriverError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "driver error")
        }
    }

    impl StdError for DriverError {}

    impl DatabaseError for DriverError {
        fn message(&self) -> &str {
            "driver error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.unique.then(|| Cow::Borrowed("23505"))
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::Other
            }
        }
    }

    fn database_error(unique: bool) -> sqlx::Error {
        sqlx::Error::Database(Box::new(DriverError { unique }))
    }

    #[test]
    fn test_postgres_config() {
        let config = PostgresConfig::new("postgres://db:5432/teams").with_max_connections(20);

        assert_eq!(config.url, "postgres://db:5432/teams");
        assert_eq!(config.max_connections, 20);
        assert_eq!(PostgresConfig::new("postgres://db").max_connections, 10);
    }

    #[test]
    fn test_statements_target_table() {
        let sql = Statements::for_table("national_teams");

        assert!(sql.create_table.contains("national_teams (key VARCHAR(255) PRIMARY KEY"));
        assert_eq!(sql.select, "SELECT data FROM national_teams WHERE key = $1");
        assert_eq!(sql.insert, "INSERT INTO national_teams (key, data) VALUES ($1, $2)");
        assert_eq!(sql.delete, "DELETE FROM national_teams WHERE key = $1");
    }

    #[test]
    fn test_unique_violation_is_conflict() {
        let err = insert_error("7", database_error(true));

        assert_eq!(err, DomainError::conflict("Document '7' already exists"));
    }

    #[test]
    fn test_other_database_errors_are_storage_errors() {
        assert!(matches!(
            insert_error("7", database_error(false)),
            DomainError::Storage { .. }
        ));
        assert!(matches!(
            insert_error("7", sqlx::Error::PoolTimedOut),
            DomainError::Storage { .. }
        ));
    }
}
