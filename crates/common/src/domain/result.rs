use thiserror::Error;

use crate::auth::{SelfEditViolation, SystemRole};

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Invalid user ID: {0}")]
    InvalidUserId(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Team already exists: {0}")]
    TeamAlreadyExists(String),

    #[error("Invalid team ID: {0}")]
    InvalidTeamId(String),

    #[error("Notification event not found: {0}")]
    NotificationEventNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Self edit rejected: {}", join_violations(.0))]
    SelfEditRejected(Vec<SelfEditViolation>),

    #[error("Field cannot be edited on your own account: {0}")]
    UnsafeSelfEditField(String),

    #[error("Invalid role transition from {from} to {to}")]
    InvalidRoleTransition { from: SystemRole, to: SystemRole },

    #[error("Billing error: {0}")]
    BillingError(String),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] anyhow::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

fn join_violations(violations: &[SelfEditViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
