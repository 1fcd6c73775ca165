use serde::{Deserialize, Serialize};

/// Global system role of a user.
///
/// The set is closed. Roles carry no numeric rank: every privilege check and
/// every role change is decided by explicit rules, never by comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemRole {
    #[default]
    User,
    SiteAdmin,
    SuperAdmin,
}

impl SystemRole {
    pub const ALL: [SystemRole; 3] = [
        SystemRole::User,
        SystemRole::SiteAdmin,
        SystemRole::SuperAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemRole::User => "user",
            SystemRole::SiteAdmin => "site_admin",
            SystemRole::SuperAdmin => "super_admin",
        }
    }

    /// Lenient parse for identities: unset or unknown roles get the least
    /// privileged role.
    pub fn from_optional(value: Option<&str>) -> Self {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Site admins and super admins.
    pub fn is_staff(&self) -> bool {
        matches!(self, SystemRole::SiteAdmin | SystemRole::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, SystemRole::SuperAdmin)
    }
}

impl std::fmt::Display for SystemRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name outside the closed [`SystemRole`] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown system role: {0}")]
pub struct UnknownRole(pub String);

impl std::str::FromStr for SystemRole {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(SystemRole::User),
            "site_admin" => Ok(SystemRole::SiteAdmin),
            "super_admin" => Ok(SystemRole::SuperAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Account status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Disabled,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a member within a single team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Owner,
    Admin,
    Member,
}

impl TeamRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Owner => "owner",
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
        }
    }

    /// Owners and admins may change team settings.
    pub fn can_manage(&self) -> bool {
        matches!(self, TeamRole::Owner | TeamRole::Admin)
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
