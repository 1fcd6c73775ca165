use crate::auth::TeamRole;
use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Team domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub billing_email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Link between a user and a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMembership {
    pub team_id: String,
    pub user_id: String,
    pub role: TeamRole,
}

/// Internal input with generated ID. The owner becomes the first member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamWithOwnerInput {
    pub id: String,
    pub name: String,
    pub billing_email: String,
    pub owner_id: String,
}

/// Input for getting a team by ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTeamInput {
    pub team_id: String,
}

/// Input for renaming a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTeamInput {
    pub team_id: String,
    pub name: String,
}

/// Input for deleting a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTeamInput {
    pub team_id: String,
}

/// Input for listing teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTeamsInput {}

/// Input for listing the memberships of one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetUserMembershipsInput {
    pub user_id: String,
}

/// Input for looking up a single membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMembershipInput {
    pub team_id: String,
    pub user_id: String,
}

/// Repository trait for team storage operations
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create the team and the owner membership in a single transaction.
    ///
    /// Either both rows exist afterwards or neither does.
    async fn create_team_with_owner(&self, input: CreateTeamWithOwnerInput) -> DomainResult<Team>;

    /// Get a team by ID
    async fn get_team(&self, input: GetTeamInput) -> DomainResult<Option<Team>>;

    /// Rename a team
    async fn update_team(&self, input: UpdateTeamInput) -> DomainResult<Team>;

    /// Delete a team together with its memberships
    async fn delete_team(&self, input: DeleteTeamInput) -> DomainResult<()>;

    /// List every team
    async fn list_teams(&self, input: ListTeamsInput) -> DomainResult<Vec<Team>>;

    /// Memberships held by a user across all teams
    async fn get_user_memberships(
        &self,
        input: GetUserMembershipsInput,
    ) -> DomainResult<Vec<TeamMembership>>;

    /// Membership of a user in a given team, if any
    async fn get_membership(&self, input: GetMembershipInput)
        -> DomainResult<Option<TeamMembership>>;
}
