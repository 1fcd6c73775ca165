use common::auth::{is_safe_self_edit_field, Actor};
use common::domain::{
    DomainError, DomainResult, GetUserInput, UpdateUserInput, User, UserChanges, UserRepository,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Self-service profile editing for the signed in user
pub struct ProfileService {
    repository: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Get the actor's own profile
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_profile(&self, actor: &Actor) -> DomainResult<User> {
        self.repository
            .get_user(GetUserInput {
                user_id: actor.id.clone(),
            })
            .await?
            .ok_or_else(|| DomainError::UserNotFound(actor.id.clone()))
    }

    /// Update the actor's own profile. Only name and email may change here;
    /// the first other field touched is reported back.
    #[instrument(skip(self, actor, changes), fields(actor_id = %actor.id))]
    pub async fn update_profile(&self, actor: &Actor, changes: UserChanges) -> DomainResult<User> {
        if let Some(field) = changes
            .touched_fields()
            .into_iter()
            .find(|field| !is_safe_self_edit_field(field.as_str()))
        {
            return Err(DomainError::UnsafeSelfEditField(field.to_string()));
        }

        common::garde::validate(&changes)?;

        if changes.is_empty() {
            return self.get_profile(actor).await;
        }

        let user = self
            .repository
            .update_user(UpdateUserInput {
                user_id: actor.id.clone(),
                changes,
            })
            .await?;

        debug!(user_id = %user.id, "profile updated");
        Ok(user)
    }
}
