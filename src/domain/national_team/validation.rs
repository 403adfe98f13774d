//! National team validation

use thiserror::Error;

/// Errors that can occur during national team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NationalTeamValidationError {
    #[error("Invalid nationalteamId: {0}")]
    InvalidId(i32),
}

/// Smallest accepted national team id
pub const MIN_NATIONAL_TEAM_ID: i32 = 1;

/// Validate a national team id
pub fn validate_national_team_id(id: i32) -> Result<(), NationalTeamValidationError> {
    if id < MIN_NATIONAL_TEAM_ID {
        return Err(NationalTeamValidationError::InvalidId(id));
    }

    Ok(())
}
