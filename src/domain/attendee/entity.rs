//! Attendee entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{AttendeeValidationError, validate_attendee_name};
use crate::domain::team::Team;

/// Attendee display name - surrounding whitespace trimmed, non-empty
///
/// Uniqueness across the roster is case-insensitive; `normalized()` gives
/// the lowercased form used for comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttendeeName(String);

impl AttendeeName {
    /// Create a new name after trimming and validation
    pub fn new(name: impl Into<String>) -> Result<Self, AttendeeValidationError> {
        let name = name.into().trim().to_string();
        validate_attendee_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value (as entered, minus surrounding whitespace)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive uniqueness
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive comparison against another name
    pub fn matches(&self, other: &AttendeeName) -> bool {
        self.normalized() == other.normalized()
    }
}

impl TryFrom<String> for AttendeeName {
    type Error = AttendeeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AttendeeName> for String {
    fn from(name: AttendeeName) -> Self {
        name.0
    }
}

impl std::fmt::Display for AttendeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered participant with a name and assigned team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    name: AttendeeName,
    team: Team,
    checked_in_at: DateTime<Utc>,
}

impl Attendee {
    /// Create a new attendee, stamped with the current time
    pub fn new(name: AttendeeName, team: Team) -> Self {
        Self {
            name,
            team,
            checked_in_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &AttendeeName {
        &self.name
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn checked_in_at(&self) -> DateTime<Utc> {
        self.checked_in_at
    }
}
