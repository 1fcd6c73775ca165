use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Notification event shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Internal input with generated ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNotificationEventInputWithId {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Input for getting a notification event by ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNotificationEventInput {
    pub event_id: String,
}

/// Input for listing notification events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNotificationEventsInput {}

/// Repository trait for notification event storage operations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait NotificationEventRepository: Send + Sync {
    async fn create_event(
        &self,
        input: CreateNotificationEventInputWithId,
    ) -> DomainResult<NotificationEvent>;

    async fn get_event(
        &self,
        input: GetNotificationEventInput,
    ) -> DomainResult<Option<NotificationEvent>>;

    async fn list_events(
        &self,
        input: ListNotificationEventsInput,
    ) -> DomainResult<Vec<NotificationEvent>>;
}
