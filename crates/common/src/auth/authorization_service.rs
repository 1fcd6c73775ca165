use tracing::{debug, instrument};

use crate::auth::{authorize, Action, Actor, Decision, Resource};
use crate::domain::{DomainError, DomainResult};

/// Trait for authorization checks
/// Enables mocking in tests while using the role policy in production
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AuthorizationProvider: Send + Sync {
    /// Check if an actor may perform an action on a resource
    fn check_permission(&self, actor: &Actor, resource: Resource, action: Action) -> Decision;

    /// Check permission and return PermissionDenied error if not allowed
    fn require_permission(
        &self,
        actor: &Actor,
        resource: Resource,
        action: Action,
    ) -> DomainResult<()> {
        if !self.check_permission(actor, resource, action).is_allowed() {
            return Err(DomainError::PermissionDenied(format!(
                "User {} ({}) may not {} {}",
                actor.id,
                actor.system_role,
                action.as_str(),
                resource.as_str()
            )));
        }
        Ok(())
    }
}

/// Authorization provider backed by the static role policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl RolePolicy {
    pub fn new() -> Self {
        Self
    }
}

impl AuthorizationProvider for RolePolicy {
    #[instrument(skip(self, actor), fields(actor_id = %actor.id, role = %actor.system_role))]
    fn check_permission(&self, actor: &Actor, resource: Resource, action: Action) -> Decision {
        let decision = authorize(actor, action, resource);
        debug!(
            resource = resource.as_str(),
            action = action.as_str(),
            ?decision,
            "policy decision"
        );
        decision
    }
}
