//! National team domain module
//!
//! A national team is identified by a positive integer id that is unique
//! across the document store.

mod entity;
mod repository;
mod validation;

pub use entity::{NationalTeam, NationalTeamEntity, NationalTeamId};
pub use repository::NationalTeamRepository;
pub use validation::{validate_national_team_id, NationalTeamValidationError};

#[cfg(test)]
pub use repository::MockNationalTeamRepository;
