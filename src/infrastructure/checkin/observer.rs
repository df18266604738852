//! Check-in notification seam
//!
//! The service stays free of presentation concerns; renderers and other
//! collaborators subscribe through this trait and are notified after each
//! state change.

use std::fmt::Debug;

use tracing::info;

use crate::domain::attendee::Attendee;
use crate::domain::checkin::{Celebration, CheckInSummary};

/// Callback interface notified on check-in state changes
pub trait CheckInObserver: Send + Sync + Debug {
    /// Called after each successful registration
    fn attendee_checked_in(&self, attendee: &Attendee, summary: &CheckInSummary);

    /// Called once, when the total first reaches capacity
    fn capacity_reached(&self, celebration: &Celebration);
}

/// Observer that reports state changes to the tracing log
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl CheckInObserver for LoggingObserver {
    fn attendee_checked_in(&self, attendee: &Attendee, summary: &CheckInSummary) {
        info!(
            name = %attendee.name(),
            team = %attendee.team(),
            total = summary.total(),
            capacity = summary.capacity(),
            "Attendee checked in"
        );
    }

    fn capacity_reached(&self, celebration: &Celebration) {
        info!(
            team = %celebration.team(),
            count = celebration.count(),
            "{}",
            celebration.message()
        );
    }
}
