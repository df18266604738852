//! Check-in service and notification seam

mod observer;
mod service;

pub use observer::{CheckInObserver, LoggingObserver};
pub use service::{CheckInService, ROSTER_KEY, RegisterRequest, TALLY_KEY};
