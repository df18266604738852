//! Check-in read models: summary, celebration and registration outcome

use crate::domain::attendee::Attendee;
use crate::domain::team::{Team, TeamTally};

/// Default attendee capacity for an event
pub const DEFAULT_CAPACITY: u32 = 50;

/// Snapshot of the check-in state at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInSummary {
    total: u32,
    capacity: u32,
    tally: TeamTally,
    progress: f64,
}

impl CheckInSummary {
    /// Derive a summary from the current tally and the event capacity
    pub fn new(tally: TeamTally, capacity: u32) -> Self {
        let total = tally.total();
        let progress = if capacity == 0 {
            1.0
        } else {
            (f64::from(total) / f64::from(capacity)).min(1.0)
        };

        Self {
            total,
            capacity,
            tally,
            progress,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn count(&self, team: Team) -> u32 {
        self.tally.count(team)
    }

    pub fn tally(&self) -> &TeamTally {
        &self.tally
    }

    /// Fraction of capacity filled, clamped to 1.0
    pub fn progress(&self) -> f64 {
        self.progress
    }
}

/// One-time notification fired exactly when the total first equals capacity
///
/// Identifies the team with the highest count; ties are broken by `Team::ALL`
/// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    team: Team,
    count: u32,
}

impl Celebration {
    pub fn new(team: Team, count: u32) -> Self {
        Self { team, count }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Announcement text shown to attendees
    pub fn message(&self) -> String {
        format!(
            "Attendance goal reached! Congratulations {} for leading with {} attendees!",
            self.team.display_name(),
            self.count
        )
    }
}

/// Outcome of a successful registration
#[derive(Debug, Clone)]
pub struct Registration {
    pub attendee: Attendee,
    pub summary: CheckInSummary,
    pub celebration: Option<Celebration>,
}
