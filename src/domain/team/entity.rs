//! Team enumeration and display names

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown team identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown team '{0}'")]
pub struct UnknownTeamError(pub String);

/// The three event teams
///
/// A closed enumeration: unknown identifiers are rejected at construction
/// (and at deserialization), never carried around as loose strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Water,
    Zero,
    Power,
}

impl Team {
    /// All teams, in the fixed traversal order used for tie-breaking
    pub const ALL: [Team; 3] = [Team::Water, Team::Zero, Team::Power];

    /// Stable identifier used in the API and persisted entries
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Zero => "zero",
            Self::Power => "power",
        }
    }

    /// Human label consumed by rendering
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Water => "Team Water Wise",
            Self::Zero => "Team Net Zero",
            Self::Power => "Team Renewables",
        }
    }
}

impl std::str::FromStr for Team {
    type Err = UnknownTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water" => Ok(Self::Water),
            "zero" => Ok(Self::Zero),
            "power" => Ok(Self::Power),
            other => Err(UnknownTeamError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
