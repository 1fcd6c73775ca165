use crate::auth::{SystemRole, UserStatus};
use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub system_role: SystemRole,
    pub status: UserStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Names of the user fields an edit request may touch.
///
/// The string forms are the parameter keys callers send and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    SystemRole,
    Status,
}

impl UserField {
    pub const ALL: [UserField; 5] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::SystemRole,
        UserField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Email => "email",
            UserField::SystemRole => "system_role",
            UserField::Status => "status",
        }
    }
}

impl std::fmt::Display for UserField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user field: {0}")]
pub struct UnknownField(pub String);

impl std::str::FromStr for UserField {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "first_name" => Ok(UserField::FirstName),
            "last_name" => Ok(UserField::LastName),
            "email" => Ok(UserField::Email),
            "system_role" => Ok(UserField::SystemRole),
            "status" => Ok(UserField::Status),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Proposed changes to a user record.
///
/// Each field is `Some` only when the caller asked to change it, so the set
/// of touched fields is exactly what the guards inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChanges {
    #[garde(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[garde(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(skip)]
    pub system_role: Option<SystemRole>,
    #[garde(skip)]
    pub status: Option<UserStatus>,
}

impl UserChanges {
    pub fn contains(&self, field: UserField) -> bool {
        match field {
            UserField::FirstName => self.first_name.is_some(),
            UserField::LastName => self.last_name.is_some(),
            UserField::Email => self.email.is_some(),
            UserField::SystemRole => self.system_role.is_some(),
            UserField::Status => self.status.is_some(),
        }
    }

    /// Touched fields in declaration order.
    pub fn touched_fields(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }
}

/// Internal input with generated ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInputWithId {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub system_role: SystemRole,
}

/// Input for getting a user by ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserInput {
    pub user_id: String,
}

/// Input for applying changes to a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserInput {
    pub user_id: String,
    pub changes: UserChanges,
}

/// Input for listing users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersInput {}

/// Repository trait for user storage operations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user (id already generated by domain service)
    async fn create_user(&self, input: CreateUserInputWithId) -> DomainResult<User>;

    /// Get a user by ID
    async fn get_user(&self, input: GetUserInput) -> DomainResult<Option<User>>;

    /// Apply the given changes and return the updated user
    async fn update_user(&self, input: UpdateUserInput) -> DomainResult<User>;

    /// List all users
    async fn list_users(&self, input: ListUsersInput) -> DomainResult<Vec<User>>;
}
