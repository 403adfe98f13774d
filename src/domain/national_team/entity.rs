//! National team entity and related types

use serde::{Deserialize, Serialize};

use super::validation::{validate_national_team_id, NationalTeamValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// National team identifier - a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct NationalTeamId(i32);

impl NationalTeamId {
    /// Create a new NationalTeamId after validation
    pub fn new(id: i32) -> Result<Self, NationalTeamValidationError> {
        validate_national_team_id(id)?;
        Ok(Self(id))
    }

    /// Get the inner value
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for NationalTeamId {
    type Error = NationalTeamValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NationalTeamId> for i32 {
    fn from(id: NationalTeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for NationalTeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for NationalTeamId {
    fn storage_key(&self) -> String {
        self.0.to_string()
    }
}

/// National team as exposed by the HTTP API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalTeam {
    pub national_team_id: i32,
    pub name: String,
    pub confederation: String,
    /// Address of the instance that served a read; never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

impl NationalTeam {
    pub fn new(
        national_team_id: i32,
        name: impl Into<String>,
        confederation: impl Into<String>,
    ) -> Self {
        Self {
            national_team_id,
            name: name.into(),
            confederation: confederation.into(),
            service_address: None,
        }
    }

    /// Set the serving instance address (builder pattern)
    pub fn with_service_address(mut self, address: impl Into<String>) -> Self {
        self.service_address = Some(address.into());
        self
    }
}

/// National team document as persisted in storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalTeamEntity {
    /// Document version, 0 until first persisted
    #[serde(default)]
    version: u32,
    nationalteam_id: NationalTeamId,
    name: String,
    confederation: String,
}

impl NationalTeamEntity {
    /// Create a not yet persisted entity
    pub fn new(
        nationalteam_id: NationalTeamId,
        name: impl Into<String>,
        confederation: impl Into<String>,
    ) -> Self {
        Self {
            version: 0,
            nationalteam_id,
            name: name.into(),
            confederation: confederation.into(),
        }
    }

    // Getters

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn nationalteam_id(&self) -> NationalTeamId {
        self.nationalteam_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn confederation(&self) -> &str {
        &self.confederation
    }

    /// Bump the document version ahead of a write
    pub fn next_version(mut self) -> Self {
        self.version += 1;
        self
    }
}

impl StorageEntity for NationalTeamEntity {
    type Key = NationalTeamId;

    fn key(&self) -> Self::Key {
        self.nationalteam_id
    }
}
