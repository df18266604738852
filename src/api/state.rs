//! Application state for shared services

use std::sync::Arc;

use crate::domain::DomainError;
use crate::domain::attendee::Attendee;
use crate::domain::checkin::{CheckInSummary, Registration};
use crate::infrastructure::checkin::{CheckInService, RegisterRequest};

/// Trait for check-in service operations
#[async_trait::async_trait]
pub trait CheckInServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError>;
    async fn summary(&self) -> Result<CheckInSummary, DomainError>;
    async fn attendees(&self) -> Result<Vec<Attendee>, DomainError>;
    fn capacity(&self) -> u32;
}

#[async_trait::async_trait]
impl CheckInServiceTrait for CheckInService {
    async fn register(&self, request: RegisterRequest) -> Result<Registration, DomainError> {
        CheckInService::register(self, request).await
    }

    async fn summary(&self) -> Result<CheckInSummary, DomainError> {
        CheckInService::summary(self).await
    }

    async fn attendees(&self) -> Result<Vec<Attendee>, DomainError> {
        CheckInService::attendees(self).await
    }

    fn capacity(&self) -> u32 {
        CheckInService::capacity(self)
    }
}

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub checkin_service: Arc<dyn CheckInServiceTrait>,
}

impl AppState {
    pub fn new(checkin_service: Arc<dyn CheckInServiceTrait>) -> Self {
        Self { checkin_service }
    }
}
