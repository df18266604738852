//! Per-team attendance tallies

use serde::{Deserialize, Serialize};

use super::entity::Team;
use crate::domain::attendee::Attendee;

/// Running count of attendees per team
///
/// Invariant: for every team `t`, `count(t)` equals the number of roster
/// attendees whose team is `t`. The tally is persisted alongside the roster
/// and rebuilt from it when the two disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamTally {
    water: u32,
    zero: u32,
    power: u32,
}

impl TeamTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the tally from an attendee roster
    pub fn from_roster(roster: &[Attendee]) -> Self {
        let mut tally = Self::new();
        for attendee in roster {
            tally.increment(attendee.team());
        }
        tally
    }

    pub fn count(&self, team: Team) -> u32 {
        match team {
            Team::Water => self.water,
            Team::Zero => self.zero,
            Team::Power => self.power,
        }
    }

    pub fn increment(&mut self, team: Team) {
        match team {
            Team::Water => self.water += 1,
            Team::Zero => self.zero += 1,
            Team::Power => self.power += 1,
        }
    }

    /// Total attendees across all teams
    pub fn total(&self) -> u32 {
        self.water + self.zero + self.power
    }

    /// The team currently in the lead, with its count
    ///
    /// Scans `Team::ALL` with a strict greater-than comparison, so on a tie
    /// the first team in traversal order keeps the lead. `None` when no one
    /// has checked in yet.
    pub fn leader(&self) -> Option<(Team, u32)> {
        let mut leader = None;
        let mut max = 0;

        for team in Team::ALL {
            let count = self.count(team);
            if count > max {
                max = count;
                leader = Some((team, count));
            }
        }

        leader
    }
}
