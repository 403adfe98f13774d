//! Domain layer - Core business logic and entities

pub mod address;
pub mod error;
pub mod national_team;
pub mod storage;

pub use address::{ServiceAddressProvider, ServiceAddresses};
pub use error::DomainError;
pub use national_team::{
    validate_national_team_id, NationalTeam, NationalTeamEntity, NationalTeamId,
    NationalTeamRepository, NationalTeamValidationError,
};
pub use storage::{Storage, StorageEntity, StorageKey};
