use common::auth::{resolve_scope, Action, Actor, AuthorizationProvider, Resource};
use common::domain::{
    CreateNotificationEventInputWithId, DomainError, DomainResult, GetNotificationEventInput,
    ListNotificationEventsInput, NotificationEvent, NotificationEventRepository,
};
use garde::Validate;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request to create a notification event
#[derive(Debug, Clone, Validate)]
pub struct CreateNotificationEventRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(length(min = 1, max = 100))]
    pub name: String,
    #[garde(length(max = 1000))]
    pub description: String,
}

/// Domain service for the admin notification event dashboard
pub struct NotificationEventService {
    repository: Arc<dyn NotificationEventRepository>,
    authorization_provider: Arc<dyn AuthorizationProvider>,
}

impl NotificationEventService {
    pub fn new(
        repository: Arc<dyn NotificationEventRepository>,
        authorization_provider: Arc<dyn AuthorizationProvider>,
    ) -> Self {
        Self {
            repository,
            authorization_provider,
        }
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_events(&self, actor: &Actor) -> DomainResult<Vec<NotificationEvent>> {
        let events = self
            .repository
            .list_events(ListNotificationEventsInput {})
            .await?;
        let visible = resolve_scope(actor, events);
        debug!(count = visible.len(), "listed notification events");
        Ok(visible)
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_event(&self, actor: &Actor, event_id: &str) -> DomainResult<NotificationEvent> {
        self.authorization_provider.require_permission(
            actor,
            Resource::NotificationEvent,
            Action::Show,
        )?;

        self.repository
            .get_event(GetNotificationEventInput {
                event_id: event_id.to_string(),
            })
            .await?
            .ok_or_else(|| DomainError::NotificationEventNotFound(event_id.to_string()))
    }

    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, name = %request.name))]
    pub async fn create_event(
        &self,
        request: CreateNotificationEventRequest,
    ) -> DomainResult<NotificationEvent> {
        self.authorization_provider.require_permission(
            &request.actor,
            Resource::NotificationEvent,
            Action::Create,
        )?;

        common::garde::validate(&request)?;

        let event = self
            .repository
            .create_event(CreateNotificationEventInputWithId {
                id: xid::new().to_string(),
                name: request.name,
                description: request.description,
            })
            .await?;

        debug!(event_id = %event.id, "notification event created");
        Ok(event)
    }
}
