//! Check-in service: registration, tallies and capacity tracking

use std::sync::{Arc, RwLock, RwLockReadGuard};

use tracing::{info, warn};

use crate::domain::DomainError;
use crate::domain::attendee::{Attendee, AttendeeName};
use crate::domain::checkin::{Celebration, CheckInSummary, Registration};
use crate::domain::storage::KeyValueStore;
use crate::domain::team::{Team, TeamTally};

use super::observer::CheckInObserver;

/// Storage entry holding the attendee roster
pub const ROSTER_KEY: &str = "attendees";
/// Storage entry holding the per-team counts
pub const TALLY_KEY: &str = "team_counts";

/// Request for registering an attendee
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub name: String,
    pub team: Team,
}

#[derive(Debug, Default)]
struct CheckInState {
    roster: Vec<Attendee>,
    tally: TeamTally,
}

/// Check-in service owning the attendee roster and team tallies
///
/// State is loaded once from the injected store at construction and kept in
/// memory; every successful registration persists both entries back. The
/// in-memory roster is the source of truth within a session.
#[derive(Debug)]
pub struct CheckInService {
    store: Arc<dyn KeyValueStore>,
    capacity: u32,
    state: RwLock<CheckInState>,
    observers: Vec<Arc<dyn CheckInObserver>>,
}

impl CheckInService {
    /// Load persisted state and return a ready service
    ///
    /// Missing entries start empty. An entry that no longer decodes is
    /// discarded with a warning rather than failing startup; a tally that
    /// disagrees with the roster is rebuilt from it.
    pub async fn load(store: Arc<dyn KeyValueStore>, capacity: u32) -> Result<Self, DomainError> {
        let roster = match store.get(ROSTER_KEY).await? {
            Some(raw) => match serde_json::from_str::<Vec<Attendee>>(&raw) {
                Ok(roster) => roster,
                Err(e) => {
                    warn!("Discarding undecodable roster entry: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let tally = match store.get(TALLY_KEY).await? {
            Some(raw) => match serde_json::from_str::<TeamTally>(&raw) {
                Ok(tally) => tally,
                Err(e) => {
                    warn!("Discarding undecodable tally entry: {}", e);
                    TeamTally::from_roster(&roster)
                }
            },
            None => TeamTally::from_roster(&roster),
        };

        // The roster is authoritative over the persisted tally.
        let recomputed = TeamTally::from_roster(&roster);
        let tally = if tally == recomputed {
            tally
        } else {
            warn!(
                persisted_total = tally.total(),
                roster_total = recomputed.total(),
                "Persisted tally disagrees with roster, rebuilding"
            );
            recomputed
        };

        info!(attendees = roster.len(), capacity, "Check-in state loaded");

        Ok(Self {
            store,
            capacity,
            state: RwLock::new(CheckInState { roster, tally }),
            observers: Vec::new(),
        })
    }

    /// Subscribe an observer (builder pattern, before the service is shared)
    pub fn with_observer(mut self, observer: Arc<dyn CheckInObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Register an attendee
    ///
    /// Fails with `DomainError::DuplicateName` when a case-insensitive match
    /// is already on the roster; state is untouched and nothing is persisted
    /// in that case. On success both storage entries are rewritten, observers
    /// are notified, and a celebration is produced if this registration
    /// brought the total exactly to capacity.
    pub async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError> {
        let name = AttendeeName::new(request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let (attendee, summary, celebration, roster_json, tally_json) = {
            let mut state = self.state.write().map_err(|e| {
                DomainError::internal(format!("Failed to acquire state lock: {}", e))
            })?;

            if state.roster.iter().any(|a| a.name().matches(&name)) {
                return Err(DomainError::duplicate_name(name.normalized()));
            }

            let attendee = Attendee::new(name, request.team);
            state.roster.push(attendee.clone());
            state.tally.increment(request.team);

            let summary = CheckInSummary::new(state.tally, self.capacity);
            let celebration = if summary.total() == self.capacity {
                state
                    .tally
                    .leader()
                    .map(|(team, count)| Celebration::new(team, count))
            } else {
                None
            };

            let roster_json = serde_json::to_string(&state.roster).map_err(|e| {
                DomainError::internal(format!("Failed to serialize roster: {}", e))
            })?;
            let tally_json = serde_json::to_string(&state.tally)
                .map_err(|e| DomainError::internal(format!("Failed to serialize tally: {}", e)))?;

            (attendee, summary, celebration, roster_json, tally_json)
        };

        self.store.put(ROSTER_KEY, &roster_json).await?;
        self.store.put(TALLY_KEY, &tally_json).await?;

        for observer in &self.observers {
            observer.attendee_checked_in(&attendee, &summary);

            if let Some(ref celebration) = celebration {
                observer.capacity_reached(celebration);
            }
        }

        Ok(Registration {
            attendee,
            summary,
            celebration,
        })
    }

    /// Current summary; pure read, no side effects
    pub async fn summary(&self) -> Result<CheckInSummary, DomainError> {
        let state = self.read_state()?;
        Ok(CheckInSummary::new(state.tally, self.capacity))
    }

    /// Attendees in registration order; a fresh list on every call
    pub async fn attendees(&self) -> Result<Vec<Attendee>, DomainError> {
        let state = self.read_state()?;
        Ok(state.roster.clone())
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, CheckInState>, DomainError> {
        self.state
            .read()
            .map_err(|e| DomainError::internal(format!("Failed to acquire state lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::storage::mock::MockKeyValueStore;
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn request(name: &str, team: Team) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            team,
        }
    }

    async fn service_with_capacity(capacity: u32) -> CheckInService {
        CheckInService::load(Arc::new(InMemoryKeyValueStore::new()), capacity)
            .await
            .unwrap()
    }

    #[derive(Debug, Default)]
    struct RecordingObserver {
        checked_in: Mutex<Vec<String>>,
        celebrations: Mutex<Vec<(Team, u32)>>,
    }

    impl CheckInObserver for RecordingObserver {
        fn attendee_checked_in(&self, attendee: &Attendee, _summary: &CheckInSummary) {
            self.checked_in
                .lock()
                .unwrap()
                .push(attendee.name().as_str().to_string());
        }

        fn capacity_reached(&self, celebration: &Celebration) {
            self.celebrations
                .lock()
                .unwrap()
                .push((celebration.team(), celebration.count()));
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = service_with_capacity(50).await;

        let registration = service
            .register(request("Alice", Team::Water))
            .await
            .unwrap();

        assert_eq!(registration.attendee.name().as_str(), "Alice");
        assert_eq!(registration.attendee.team(), Team::Water);
        assert_eq!(registration.summary.total(), 1);
        assert!(registration.celebration.is_none());
    }

    #[tokio::test]
    async fn test_register_trims_name() {
        let service = service_with_capacity(50).await;

        let registration = service
            .register(request("  Alice  ", Team::Zero))
            .await
            .unwrap();

        assert_eq!(registration.attendee.name().as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_register_empty_name_rejected() {
        let service = service_with_capacity(50).await;

        let result = service.register(request("   ", Team::Water)).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(service.summary().await.unwrap().total(), 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_case_insensitive() {
        let service = service_with_capacity(50).await;

        service
            .register(request("Alice", Team::Water))
            .await
            .unwrap();
        service.register(request("Bob", Team::Zero)).await.unwrap();

        let result = service.register(request("alice", Team::Power)).await;
        match result {
            Err(DomainError::DuplicateName { name }) => assert_eq!(name, "alice"),
            other => panic!("Expected duplicate error, got {:?}", other),
        }

        // State unchanged by the failed attempt
        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count(Team::Water), 1);
        assert_eq!(summary.count(Team::Zero), 1);
        assert_eq!(summary.count(Team::Power), 0);
    }

    #[tokio::test]
    async fn test_counts_sum_to_total() {
        let service = service_with_capacity(50).await;

        for i in 0..12 {
            service
                .register(request(&format!("guest-{}", i), Team::ALL[i % 3]))
                .await
                .unwrap();
        }

        let summary = service.summary().await.unwrap();
        let sum: u32 = Team::ALL.iter().map(|&t| summary.count(t)).sum();
        assert_eq!(summary.total(), 12);
        assert_eq!(sum, 12);
    }

    #[tokio::test]
    async fn test_progress_monotonic_and_clamped() {
        let service = service_with_capacity(10).await;
        let mut last = 0.0_f64;

        for i in 0..12 {
            service
                .register(request(&format!("guest-{}", i), Team::Water))
                .await
                .unwrap();

            let progress = service.summary().await.unwrap().progress();
            assert!(progress >= last);
            assert!(progress <= 1.0);
            last = progress;
        }

        assert!((last - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_attendees_in_registration_order() {
        let service = service_with_capacity(50).await;

        for name in ["Carol", "Alice", "Bob"] {
            service.register(request(name, Team::Zero)).await.unwrap();
        }

        let names: Vec<String> = service
            .attendees()
            .await
            .unwrap()
            .iter()
            .map(|a| a.name().as_str().to_string())
            .collect();

        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[tokio::test]
    async fn test_state_round_trips_through_store() {
        let store = Arc::new(InMemoryKeyValueStore::new());

        let service = CheckInService::load(store.clone(), 50).await.unwrap();
        service
            .register(request("Alice", Team::Water))
            .await
            .unwrap();
        service.register(request("Bob", Team::Power)).await.unwrap();
        let before = service.attendees().await.unwrap();

        // A fresh service over the same store sees identical state
        let reloaded = CheckInService::load(store, 50).await.unwrap();
        assert_eq!(reloaded.attendees().await.unwrap(), before);

        let summary = reloaded.summary().await.unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count(Team::Water), 1);
        assert_eq!(summary.count(Team::Power), 1);
    }

    #[tokio::test]
    async fn test_celebration_at_capacity() {
        let service = service_with_capacity(50).await;

        for i in 0..30 {
            service
                .register(request(&format!("w-{}", i), Team::Water))
                .await
                .unwrap();
        }
        for i in 0..15 {
            service
                .register(request(&format!("z-{}", i), Team::Zero))
                .await
                .unwrap();
        }
        for i in 0..4 {
            service
                .register(request(&format!("p-{}", i), Team::Power))
                .await
                .unwrap();
        }

        // 49 so far, no celebration yet
        assert_eq!(service.summary().await.unwrap().total(), 49);

        let registration = service.register(request("last", Team::Power)).await.unwrap();
        let celebration = registration.celebration.expect("celebration at capacity");
        assert_eq!(celebration.team(), Team::Water);
        assert_eq!(celebration.count(), 30);
    }

    #[tokio::test]
    async fn test_tie_below_capacity_no_celebration() {
        let service = service_with_capacity(50).await;

        for i in 0..10 {
            service
                .register(request(&format!("w-{}", i), Team::Water))
                .await
                .unwrap();
            service
                .register(request(&format!("z-{}", i), Team::Zero))
                .await
                .unwrap();
        }

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total(), 20);
        assert_eq!(summary.count(Team::Water), 10);
        assert_eq!(summary.count(Team::Zero), 10);

        let attendees = service.attendees().await.unwrap();
        assert_eq!(attendees.len(), 20);
    }

    #[tokio::test]
    async fn test_celebration_tie_broken_by_traversal_order() {
        let service = service_with_capacity(4).await;

        service.register(request("z1", Team::Zero)).await.unwrap();
        service.register(request("p1", Team::Power)).await.unwrap();
        service.register(request("z2", Team::Zero)).await.unwrap();

        let registration = service.register(request("p2", Team::Power)).await.unwrap();
        let celebration = registration.celebration.expect("celebration at capacity");

        // zero and power tie at 2; zero comes first in traversal order
        assert_eq!(celebration.team(), Team::Zero);
        assert_eq!(celebration.count(), 2);
    }

    #[tokio::test]
    async fn test_registration_past_capacity_allowed() {
        let service = service_with_capacity(2).await;

        service.register(request("a", Team::Water)).await.unwrap();
        let at_capacity = service.register(request("b", Team::Water)).await.unwrap();
        assert!(at_capacity.celebration.is_some());

        // No hard cap, and no second celebration
        let past = service.register(request("c", Team::Zero)).await.unwrap();
        assert!(past.celebration.is_none());
        assert_eq!(past.summary.total(), 3);
    }

    #[tokio::test]
    async fn test_observers_notified() {
        let observer = Arc::new(RecordingObserver::default());
        let service = service_with_capacity(2)
            .await
            .with_observer(observer.clone());

        service.register(request("Alice", Team::Water)).await.unwrap();
        service.register(request("Bob", Team::Zero)).await.unwrap();

        let result = service.register(request("alice", Team::Power)).await;
        assert!(result.is_err());

        // Failed registration does not notify
        assert_eq!(*observer.checked_in.lock().unwrap(), ["Alice", "Bob"]);
        assert_eq!(*observer.celebrations.lock().unwrap(), [(Team::Water, 1)]);
    }

    #[tokio::test]
    async fn test_load_recovers_from_corrupt_roster() {
        let store = MockKeyValueStore::new()
            .with_entry(ROSTER_KEY, "{not valid json")
            .with_entry(TALLY_KEY, "also broken");

        let service = CheckInService::load(Arc::new(store), 50).await.unwrap();
        assert_eq!(service.summary().await.unwrap().total(), 0);
        assert!(service.attendees().await.unwrap().is_empty());

        // Service remains usable; next registration rewrites the entries
        service.register(request("Alice", Team::Water)).await.unwrap();
        assert_eq!(service.summary().await.unwrap().total(), 1);
    }

    #[tokio::test]
    async fn test_load_rebuilds_mismatched_tally() {
        let roster = vec![
            Attendee::new(AttendeeName::new("Alice").unwrap(), Team::Water),
            Attendee::new(AttendeeName::new("Bob").unwrap(), Team::Water),
        ];
        let store = MockKeyValueStore::new()
            .with_entry(ROSTER_KEY, serde_json::to_string(&roster).unwrap())
            .with_entry(TALLY_KEY, r#"{"water":7,"zero":3,"power":0}"#);

        let service = CheckInService::load(Arc::new(store), 50).await.unwrap();

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count(Team::Water), 2);
        assert_eq!(summary.count(Team::Zero), 0);
    }

    #[tokio::test]
    async fn test_load_propagates_storage_failure() {
        let failing = Arc::new(MockKeyValueStore::new().with_error("disk full"));

        let result = CheckInService::load(failing, 50).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
