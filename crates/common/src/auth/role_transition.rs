use crate::auth::SystemRole;

/// Roles a user holding `from` may be moved to.
///
/// Explicit allow-list with no reflexive entries. The match is exhaustive, so
/// adding a role forces this table to be revisited.
pub fn allowed_transitions(from: SystemRole) -> &'static [SystemRole] {
    match from {
        SystemRole::User => &[SystemRole::SiteAdmin, SystemRole::SuperAdmin],
        SystemRole::SiteAdmin => &[SystemRole::User, SystemRole::SuperAdmin],
        SystemRole::SuperAdmin => &[SystemRole::User, SystemRole::SiteAdmin],
    }
}

/// A proposed change of system role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTransition {
    pub from: SystemRole,
    pub to: SystemRole,
}

impl RoleTransition {
    pub fn new(from: SystemRole, to: SystemRole) -> Self {
        Self { from, to }
    }

    pub fn is_valid(&self) -> bool {
        validate_role_transition(self.from, self.to)
    }
}

/// True iff `to` is in the allow-list of `from`.
pub fn validate_role_transition(from: SystemRole, to: SystemRole) -> bool {
    allowed_transitions(from).contains(&to)
}

/// String form of [`validate_role_transition`]. Any name outside the role
/// set makes the transition invalid.
pub fn validate_role_transition_names(from: &str, to: &str) -> bool {
    match (from.parse::<SystemRole>(), to.parse::<SystemRole>()) {
        (Ok(from), Ok(to)) => validate_role_transition(from, to),
        _ => false,
    }
}
