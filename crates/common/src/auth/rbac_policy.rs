use crate::auth::{Actor, TeamRole};

/// Resource types for authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Admin dashboard notification events (global scope)
    NotificationEvent,
    /// Admin dashboard user management (global scope)
    User,
    /// A team, with the actor's membership in it if any (team scope)
    Team { membership: Option<TeamRole> },
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::NotificationEvent => "notification_event",
            Resource::User => "user",
            Resource::Team { .. } => "team",
        }
    }
}

/// Actions that can be performed on resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Index,
    Show,
    New,
    Create,
    Edit,
    Update,
    Destroy,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Index,
        Action::Show,
        Action::New,
        Action::Create,
        Action::Edit,
        Action::Update,
        Action::Destroy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Index => "index",
            Action::Show => "show",
            Action::New => "new",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Update => "update",
            Action::Destroy => "destroy",
        }
    }
}

/// Outcome of a policy check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    fn from_bool(allowed: bool) -> Self {
        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}

/// Decide whether `actor` may perform `action` on `resource`.
///
/// Pure function of its inputs. Anything not explicitly granted is denied.
pub fn authorize(actor: &Actor, action: Action, resource: Resource) -> Decision {
    let role = actor.system_role;
    let allowed = match resource {
        Resource::NotificationEvent => match action {
            Action::Index | Action::Show => role.is_staff(),
            Action::New | Action::Create => role.is_super_admin(),
            Action::Edit | Action::Update | Action::Destroy => false,
        },
        Resource::User => match action {
            Action::Index | Action::Show | Action::Edit | Action::Update => role.is_staff(),
            Action::New | Action::Create | Action::Destroy => role.is_super_admin(),
        },
        Resource::Team { membership } => match action {
            Action::Index | Action::New | Action::Create => true,
            Action::Show => membership.is_some() || role.is_staff(),
            Action::Edit | Action::Update => {
                membership.is_some_and(|m| m.can_manage()) || role.is_super_admin()
            }
            Action::Destroy => membership == Some(TeamRole::Owner) || role.is_super_admin(),
        },
    };
    Decision::from_bool(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SystemRole;

    fn actor(role: SystemRole) -> Actor {
        Actor::new("actor-1", role)
    }

    #[test]
    fn test_notification_event_read_requires_staff() {
        for action in [Action::Index, Action::Show] {
            assert_eq!(
                authorize(&actor(SystemRole::User), action, Resource::NotificationEvent),
                Decision::Deny
            );
            assert_eq!(
                authorize(&actor(SystemRole::SiteAdmin), action, Resource::NotificationEvent),
                Decision::Allow
            );
            assert_eq!(
                authorize(&actor(SystemRole::SuperAdmin), action, Resource::NotificationEvent),
                Decision::Allow
            );
        }
    }

    #[test]
    fn test_notification_event_create_is_super_admin_only() {
        for action in [Action::New, Action::Create] {
            assert_eq!(
                authorize(&actor(SystemRole::User), action, Resource::NotificationEvent),
                Decision::Deny
            );
            assert_eq!(
                authorize(&actor(SystemRole::SiteAdmin), action, Resource::NotificationEvent),
                Decision::Deny
            );
            assert_eq!(
                authorize(&actor(SystemRole::SuperAdmin), action, Resource::NotificationEvent),
                Decision::Allow
            );
        }
    }

    #[test]
    fn test_notification_event_mutations_denied_for_everyone() {
        for role in SystemRole::ALL {
            for action in [Action::Edit, Action::Update, Action::Destroy] {
                assert_eq!(
                    authorize(&actor(role), action, Resource::NotificationEvent),
                    Decision::Deny
                );
            }
        }
    }

    #[test]
    fn test_user_management() {
        let site_admin = actor(SystemRole::SiteAdmin);
        assert!(authorize(&site_admin, Action::Update, Resource::User).is_allowed());
        assert!(!authorize(&site_admin, Action::Create, Resource::User).is_allowed());
        assert!(!authorize(&site_admin, Action::Destroy, Resource::User).is_allowed());

        let user = actor(SystemRole::User);
        for action in Action::ALL {
            assert!(!authorize(&user, action, Resource::User).is_allowed());
        }
    }

    #[test]
    fn test_team_member_can_show_but_not_update() {
        let member = Resource::Team {
            membership: Some(TeamRole::Member),
        };
        let user = actor(SystemRole::User);
        assert!(authorize(&user, Action::Show, member).is_allowed());
        assert!(!authorize(&user, Action::Update, member).is_allowed());
        assert!(!authorize(&user, Action::Destroy, member).is_allowed());
    }

    #[test]
    fn test_team_admin_updates_only_owner_destroys() {
        let user = actor(SystemRole::User);
        let admin = Resource::Team {
            membership: Some(TeamRole::Admin),
        };
        let owner = Resource::Team {
            membership: Some(TeamRole::Owner),
        };
        assert!(authorize(&user, Action::Update, admin).is_allowed());
        assert!(!authorize(&user, Action::Destroy, admin).is_allowed());
        assert!(authorize(&user, Action::Destroy, owner).is_allowed());
    }

    #[test]
    fn test_team_outsider() {
        let outside = Resource::Team { membership: None };
        assert!(!authorize(&actor(SystemRole::User), Action::Show, outside).is_allowed());
        assert!(authorize(&actor(SystemRole::User), Action::Create, outside).is_allowed());
        assert!(authorize(&actor(SystemRole::SiteAdmin), Action::Show, outside).is_allowed());
        assert!(!authorize(&actor(SystemRole::SiteAdmin), Action::Update, outside).is_allowed());
        assert!(authorize(&actor(SystemRole::SuperAdmin), Action::Destroy, outside).is_allowed());
    }

    #[test]
    fn test_unknown_role_actor_is_denied() {
        let unknown = Actor::from_role_name("actor-1", Some("root"));
        for action in Action::ALL {
            assert_eq!(
                authorize(&unknown, action, Resource::NotificationEvent),
                Decision::Deny
            );
        }
    }
}
