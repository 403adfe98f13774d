//! Addresses of the services taking part in a composite response

use serde::{Deserialize, Serialize};

/// Network locations of the six collaborating services.
///
/// Built once at startup and shared read-only. Unconfigured entries are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAddresses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    composite: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    team: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    league: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    national_team: Option<String>,
}

impl ServiceAddresses {
    /// Create an address book with every service address set
    pub fn new(
        composite: impl Into<String>,
        player: impl Into<String>,
        nationality: impl Into<String>,
        team: impl Into<String>,
        league: impl Into<String>,
        national_team: impl Into<String>,
    ) -> Self {
        Self {
            composite: Some(composite.into()),
            player: Some(player.into()),
            nationality: Some(nationality.into()),
            team: Some(team.into()),
            league: Some(league.into()),
            national_team: Some(national_team.into()),
        }
    }

    /// Create an address book where any entry may be missing
    pub fn from_optional(
        composite: Option<String>,
        player: Option<String>,
        nationality: Option<String>,
        team: Option<String>,
        league: Option<String>,
        national_team: Option<String>,
    ) -> Self {
        Self {
            composite,
            player,
            nationality,
            team,
            league,
            national_team,
        }
    }

    pub fn composite(&self) -> Option<&str> {
        self.composite.as_deref()
    }

    pub fn player(&self) -> Option<&str> {
        self.player.as_deref()
    }

    pub fn nationality(&self) -> Option<&str> {
        self.nationality.as_deref()
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn league(&self) -> Option<&str> {
        self.league.as_deref()
    }

    pub fn national_team(&self) -> Option<&str> {
        self.national_team.as_deref()
    }
}
