use common::auth::{
    resolve_scope, validate_no_self_role_edit, validate_role_transition, Action, Actor,
    AuthorizationProvider, Resource, SystemRole, Target,
};
use common::domain::{
    CreateUserInputWithId, DomainError, DomainResult, GetUserInput, ListUsersInput,
    UpdateUserInput, User, UserChanges, UserRepository,
};
use garde::Validate;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request to create a user from the admin dashboard
#[derive(Debug, Clone, Validate)]
pub struct CreateUserRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1, max = 100))]
    pub first_name: String,
    #[garde(length(min = 1, max = 100))]
    pub last_name: String,
    #[garde(skip)]
    pub system_role: SystemRole,
}

/// Request to change a user from the admin dashboard
#[derive(Debug, Clone, Validate)]
pub struct UpdateUserRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(length(min = 1))]
    pub user_id: String,
    #[garde(dive)]
    pub changes: UserChanges,
}

/// Domain service behind the admin user management dashboard
pub struct UserAdminService {
    repository: Arc<dyn UserRepository>,
    authorization_provider: Arc<dyn AuthorizationProvider>,
}

impl UserAdminService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        authorization_provider: Arc<dyn AuthorizationProvider>,
    ) -> Self {
        Self {
            repository,
            authorization_provider,
        }
    }

    /// Users visible to the actor: everyone for staff, nobody otherwise
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_users(&self, actor: &Actor) -> DomainResult<Vec<User>> {
        let users = self.repository.list_users(ListUsersInput {}).await?;
        let visible = resolve_scope(actor, users);
        debug!(count = visible.len(), "listed users");
        Ok(visible)
    }

    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_user(&self, actor: &Actor, user_id: &str) -> DomainResult<User> {
        self.authorization_provider
            .require_permission(actor, Resource::User, Action::Show)?;

        self.find_user(user_id).await
    }

    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, email = %request.email))]
    pub async fn create_user(&self, request: CreateUserRequest) -> DomainResult<User> {
        common::garde::validate(&request)?;

        self.authorization_provider
            .require_permission(&request.actor, Resource::User, Action::Create)?;

        let user = self
            .repository
            .create_user(CreateUserInputWithId {
                id: xid::new().to_string(),
                email: request.email,
                first_name: request.first_name,
                last_name: request.last_name,
                system_role: request.system_role,
            })
            .await?;

        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Apply changes to a user.
    ///
    /// Order of checks: permission, field validation, self-edit restriction,
    /// role transition. Nothing is written unless all pass.
    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, user_id = %request.user_id))]
    pub async fn update_user(&self, request: UpdateUserRequest) -> DomainResult<User> {
        self.authorization_provider
            .require_permission(&request.actor, Resource::User, Action::Update)?;

        common::garde::validate(&request)?;

        let existing = self.find_user(&request.user_id).await?;
        let target = Target::from(&existing);

        let violations = validate_no_self_role_edit(&request.actor, &target, &request.changes);
        if !violations.is_empty() {
            return Err(DomainError::SelfEditRejected(violations));
        }

        let mut changes = request.changes;
        if let Some(to) = changes.system_role {
            if to == existing.system_role {
                // Unchanged role is not a transition.
                changes.system_role = None;
            } else if !validate_role_transition(existing.system_role, to) {
                return Err(DomainError::InvalidRoleTransition {
                    from: existing.system_role,
                    to,
                });
            }
        }

        if changes.is_empty() {
            debug!("no changes to apply");
            return Ok(existing);
        }

        let user = self
            .repository
            .update_user(UpdateUserInput {
                user_id: request.user_id,
                changes,
            })
            .await?;

        debug!(user_id = %user.id, role = %user.system_role, status = %user.status, "user updated");
        Ok(user)
    }

    async fn find_user(&self, user_id: &str) -> DomainResult<User> {
        if user_id.is_empty() {
            return Err(DomainError::InvalidUserId(
                "User ID cannot be empty".to_string(),
            ));
        }

        self.repository
            .get_user(GetUserInput {
                user_id: user_id.to_string(),
            })
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::auth::{MockAuthorizationProvider, RolePolicy, SelfEditViolation, UserStatus};
    use common::domain::MockUserRepository;

    fn test_user(id: &str, role: SystemRole) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            system_role: role,
            status: UserStatus::Active,
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        }
    }

    fn service(repo: MockUserRepository) -> UserAdminService {
        UserAdminService::new(Arc::new(repo), Arc::new(RolePolicy::new()))
    }

    fn repo_with_user(user: User) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user()
            .returning(move |_| Ok(Some(user.clone())));
        repo
    }

    #[tokio::test]
    async fn test_list_users_empty_for_plain_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().returning(|_| {
            Ok(vec![
                test_user("u1", SystemRole::User),
                test_user("u2", SystemRole::SiteAdmin),
            ])
        });

        let users = service(repo)
            .list_users(&Actor::new("u1", SystemRole::User))
            .await
            .unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_list_users_full_for_site_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_list_users().returning(|_| {
            Ok(vec![
                test_user("u1", SystemRole::User),
                test_user("u2", SystemRole::SiteAdmin),
            ])
        });

        let users = service(repo)
            .list_users(&Actor::new("u2", SystemRole::SiteAdmin))
            .await
            .unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(1).returning(|_| Ok(None));

        let result = service(repo)
            .get_user(&Actor::new("a1", SystemRole::SiteAdmin), "missing")
            .await;
        assert!(matches!(result, Err(DomainError::UserNotFound(_))));
    }

    #[tokio::test]
    async fn test_get_user_denied_without_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);

        let result = service(repo)
            .get_user(&Actor::new("u1", SystemRole::User), "u2")
            .await;
        assert!(matches!(result, Err(DomainError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_create_user_requires_super_admin() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user().times(0);

        let result = service(repo)
            .create_user(CreateUserRequest {
                actor: Actor::new("a1", SystemRole::SiteAdmin),
                email: "new@example.com".to_string(),
                first_name: "New".to_string(),
                last_name: "User".to_string(),
                system_role: SystemRole::User,
            })
            .await;
        assert!(matches!(result, Err(DomainError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_create_user()
            .withf(|input: &CreateUserInputWithId| {
                !input.id.is_empty() && input.email == "new@example.com"
            })
            .times(1)
            .returning(|input| Ok(test_user(&input.id, input.system_role)));

        let user = service(repo)
            .create_user(CreateUserRequest {
                actor: Actor::new("s1", SystemRole::SuperAdmin),
                email: "new@example.com".to_string(),
                first_name: "New".to_string(),
                last_name: "User".to_string(),
                system_role: SystemRole::SiteAdmin,
            })
            .await
            .unwrap();
        assert_eq!(user.system_role, SystemRole::SiteAdmin);
    }

    #[tokio::test]
    async fn test_update_own_role_and_status_rejected() {
        let mut repo = repo_with_user(test_user("s1", SystemRole::SuperAdmin));
        repo.expect_update_user().times(0);

        let result = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("s1", SystemRole::SuperAdmin),
                user_id: "s1".to_string(),
                changes: UserChanges {
                    system_role: Some(SystemRole::User),
                    status: Some(UserStatus::Disabled),
                    ..Default::default()
                },
            })
            .await;

        match result {
            Err(DomainError::SelfEditRejected(violations)) => assert_eq!(
                violations,
                vec![SelfEditViolation::SystemRole, SelfEditViolation::Status]
            ),
            other => panic!("Expected SelfEditRejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_promote_other_user() {
        let mut repo = repo_with_user(test_user("u1", SystemRole::User));
        repo.expect_update_user()
            .withf(|input: &UpdateUserInput| {
                input.user_id == "u1" && input.changes.system_role == Some(SystemRole::SiteAdmin)
            })
            .times(1)
            .returning(|_| Ok(test_user("u1", SystemRole::SiteAdmin)));

        let user = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("a1", SystemRole::SiteAdmin),
                user_id: "u1".to_string(),
                changes: UserChanges {
                    system_role: Some(SystemRole::SiteAdmin),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(user.system_role, SystemRole::SiteAdmin);
    }

    #[tokio::test]
    async fn test_same_role_is_dropped_not_rejected() {
        let existing = test_user("u1", SystemRole::User);
        let mut repo = repo_with_user(existing.clone());
        repo.expect_update_user().times(0);

        let user = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("a1", SystemRole::SiteAdmin),
                user_id: "u1".to_string(),
                changes: UserChanges {
                    system_role: Some(SystemRole::User),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(user, existing);
    }

    #[tokio::test]
    async fn test_update_denied_for_plain_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);
        repo.expect_update_user().times(0);

        let result = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("u1", SystemRole::User),
                user_id: "u2".to_string(),
                changes: UserChanges {
                    status: Some(UserStatus::Disabled),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(result, Err(DomainError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_site_admin_may_grant_super_admin() {
        let mut repo = repo_with_user(test_user("u1", SystemRole::User));
        repo.expect_update_user()
            .times(1)
            .returning(|_| Ok(test_user("u1", SystemRole::SuperAdmin)));

        let user = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("a1", SystemRole::SiteAdmin),
                user_id: "u1".to_string(),
                changes: UserChanges {
                    system_role: Some(SystemRole::SuperAdmin),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(user.system_role, SystemRole::SuperAdmin);
    }

    #[tokio::test]
    async fn test_mocked_denial_stops_before_lookup() {
        let mut auth = MockAuthorizationProvider::new();
        auth.expect_require_permission()
            .returning(|_, _, _| Err(DomainError::PermissionDenied("mocked".to_string())));
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);

        let service = UserAdminService::new(Arc::new(repo), Arc::new(auth));
        let result = service
            .update_user(UpdateUserRequest {
                actor: Actor::new("s1", SystemRole::SuperAdmin),
                user_id: "u1".to_string(),
                changes: UserChanges::default(),
            })
            .await;
        assert!(matches!(result, Err(DomainError::PermissionDenied(_))));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_user().times(0);

        let result = service(repo)
            .update_user(UpdateUserRequest {
                actor: Actor::new("a1", SystemRole::SiteAdmin),
                user_id: "u1".to_string(),
                changes: UserChanges {
                    email: Some("bad".to_string()),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(result, Err(DomainError::ValidationError(_))));
    }
}
