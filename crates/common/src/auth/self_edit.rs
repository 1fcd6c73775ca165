use serde::{Deserialize, Serialize};

use crate::auth::{Actor, Target};
use crate::domain::{UserChanges, UserField};

/// A field the actor tried to change on its own account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfEditViolation {
    SystemRole,
    Status,
}

impl SelfEditViolation {
    pub fn message(&self) -> &'static str {
        match self {
            SelfEditViolation::SystemRole => "cannot change own system role",
            SelfEditViolation::Status => "cannot change own account status",
        }
    }

    pub fn field(&self) -> UserField {
        match self {
            SelfEditViolation::SystemRole => UserField::SystemRole,
            SelfEditViolation::Status => UserField::Status,
        }
    }
}

impl std::fmt::Display for SelfEditViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Block an actor from changing its own `system_role` or `status`.
///
/// Returns every violation in a fixed order (role first, then status). An
/// empty vector means the edit is acceptable. Holds regardless of the actor's
/// role.
pub fn validate_no_self_role_edit(
    actor: &Actor,
    target: &Target,
    changes: &UserChanges,
) -> Vec<SelfEditViolation> {
    if !actor.is_same_identity(target) {
        return Vec::new();
    }
    let mut violations = Vec::new();
    if changes.contains(UserField::SystemRole) {
        violations.push(SelfEditViolation::SystemRole);
    }
    if changes.contains(UserField::Status) {
        violations.push(SelfEditViolation::Status);
    }
    violations
}

/// Positive allow-list for profile self-service.
pub fn is_safe_self_edit_field(field: &str) -> bool {
    field
        .parse::<UserField>()
        .is_ok_and(|field| field.is_safe_for_self_edit())
}

impl UserField {
    /// Only name and email may be edited by the account holder.
    pub fn is_safe_for_self_edit(&self) -> bool {
        matches!(
            self,
            UserField::FirstName | UserField::LastName | UserField::Email
        )
    }
}
