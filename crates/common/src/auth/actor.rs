use crate::auth::SystemRole;
use crate::domain::User;

/// Identity performing an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub system_role: SystemRole,
}

impl Actor {
    pub fn new(id: impl Into<String>, system_role: SystemRole) -> Self {
        Self {
            id: id.into(),
            system_role,
        }
    }

    /// Build an actor from an unchecked role name. Unknown or missing names
    /// yield a plain `user`.
    pub fn from_role_name(id: impl Into<String>, role: Option<&str>) -> Self {
        Self::new(id, SystemRole::from_optional(role))
    }

    /// True when this actor and the target are the same identity.
    pub fn is_same_identity(&self, target: &Target) -> bool {
        self.id == target.id
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.id.clone(), user.system_role)
    }
}

/// User being acted upon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub system_role: SystemRole,
}

impl Target {
    pub fn new(id: impl Into<String>, system_role: SystemRole) -> Self {
        Self {
            id: id.into(),
            system_role,
        }
    }
}

impl From<&User> for Target {
    fn from(user: &User) -> Self {
        Self::new(user.id.clone(), user.system_role)
    }
}
