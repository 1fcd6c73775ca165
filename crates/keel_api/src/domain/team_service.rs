use chrono::{Duration, Utc};
use common::auth::{resolve_team_scope, Action, Actor, AuthorizationProvider, Resource};
use common::domain::{
    BillingProvider, CreateBillingCustomerInput, CreateTeamWithOwnerInput, DeleteTeamInput,
    DomainError, DomainResult, GetMembershipInput, GetTeamInput, GetUserMembershipsInput,
    ListTeamsInput, Team, TeamRepository, UpdateTeamInput,
};
use garde::Validate;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

// ============================================================================
// Service Request Types
// ============================================================================

/// Request to provision a new team owned by the requesting user
#[derive(Debug, Clone, Validate)]
pub struct CreateTeamRequest {
    #[garde(length(min = 1))]
    pub owner_id: String,
    #[garde(length(min = 1, max = 100))]
    pub name: String,
    #[garde(email)]
    pub billing_email: String,
}

/// Request to get a team by ID
#[derive(Debug, Clone, Validate)]
pub struct GetTeamRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(length(min = 1))]
    pub team_id: String,
}

/// Request to rename a team
#[derive(Debug, Clone, Validate)]
pub struct UpdateTeamRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(length(min = 1))]
    pub team_id: String,
    #[garde(length(min = 1, max = 100))]
    pub name: String,
}

/// Request to delete a team
#[derive(Debug, Clone, Validate)]
pub struct DeleteTeamRequest {
    #[garde(skip)]
    pub actor: Actor,
    #[garde(length(min = 1))]
    pub team_id: String,
}

/// Billing defaults for new teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamServiceConfig {
    pub default_plan: String,
    pub trial_days: u32,
}

impl Default for TeamServiceConfig {
    fn default() -> Self {
        Self {
            default_plan: "free".to_string(),
            trial_days: 14,
        }
    }
}

/// Domain service for team provisioning and management
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
    billing_provider: Arc<dyn BillingProvider>,
    authorization_provider: Arc<dyn AuthorizationProvider>,
    config: TeamServiceConfig,
}

impl TeamService {
    pub fn new(
        repository: Arc<dyn TeamRepository>,
        billing_provider: Arc<dyn BillingProvider>,
        authorization_provider: Arc<dyn AuthorizationProvider>,
        config: TeamServiceConfig,
    ) -> Self {
        Self {
            repository,
            billing_provider,
            authorization_provider,
            config,
        }
    }

    /// Provision a team: team + owner membership in one transaction, then
    /// billing. A billing failure removes the team again.
    #[instrument(skip(self, request), fields(name = %request.name, owner_id = %request.owner_id))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> DomainResult<Team> {
        common::garde::validate(&request)?;

        debug!(name = %request.name, "provisioning team");

        let team_id = xid::new().to_string();

        let team = self
            .repository
            .create_team_with_owner(CreateTeamWithOwnerInput {
                id: team_id,
                name: request.name,
                billing_email: request.billing_email.clone(),
                owner_id: request.owner_id,
            })
            .await?;

        let trial_ends_at = (self.config.trial_days > 0)
            .then(|| Utc::now() + Duration::days(i64::from(self.config.trial_days)));

        let billing = self
            .billing_provider
            .create_customer(CreateBillingCustomerInput {
                team_id: team.id.clone(),
                email: request.billing_email,
                plan: self.config.default_plan.clone(),
                trial_ends_at,
            })
            .await;

        match billing {
            Ok(customer) => {
                debug!(team_id = %team.id, customer_id = %customer.id, "team provisioned");
                Ok(team)
            }
            Err(err) => {
                warn!(team_id = %team.id, error = %err, "billing setup failed, removing team");
                if let Err(cleanup_err) = self
                    .repository
                    .delete_team(DeleteTeamInput {
                        team_id: team.id.clone(),
                    })
                    .await
                {
                    warn!(team_id = %team.id, error = %cleanup_err, "failed to remove team after billing failure");
                }
                Err(match err {
                    billing_err @ DomainError::BillingError(_) => billing_err,
                    other => DomainError::BillingError(other.to_string()),
                })
            }
        }
    }

    /// Get a team the actor is allowed to see
    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, team_id = %request.team_id))]
    pub async fn get_team(&self, request: GetTeamRequest) -> DomainResult<Team> {
        common::garde::validate(&request)?;

        self.require_team_permission(&request.actor, &request.team_id, Action::Show)
            .await?;

        self.repository
            .get_team(GetTeamInput {
                team_id: request.team_id.clone(),
            })
            .await?
            .ok_or(DomainError::TeamNotFound(request.team_id))
    }

    /// Teams visible to the actor
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_teams(&self, actor: &Actor) -> DomainResult<Vec<Team>> {
        self.authorization_provider.require_permission(
            actor,
            Resource::Team { membership: None },
            Action::Index,
        )?;

        let teams = self.repository.list_teams(ListTeamsInput {}).await?;
        let memberships = if actor.system_role.is_staff() {
            Vec::new()
        } else {
            self.repository
                .get_user_memberships(GetUserMembershipsInput {
                    user_id: actor.id.clone(),
                })
                .await?
        };

        let visible = resolve_team_scope(actor, teams, &memberships);
        debug!(count = visible.len(), "listed teams");
        Ok(visible)
    }

    /// Rename a team
    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, team_id = %request.team_id))]
    pub async fn update_team(&self, request: UpdateTeamRequest) -> DomainResult<Team> {
        common::garde::validate(&request)?;

        self.require_team_permission(&request.actor, &request.team_id, Action::Update)
            .await?;

        let team = self
            .repository
            .update_team(UpdateTeamInput {
                team_id: request.team_id,
                name: request.name,
            })
            .await?;

        debug!(team_id = %team.id, "team updated");
        Ok(team)
    }

    /// Delete a team
    #[instrument(skip(self, request), fields(actor_id = %request.actor.id, team_id = %request.team_id))]
    pub async fn delete_team(&self, request: DeleteTeamRequest) -> DomainResult<()> {
        common::garde::validate(&request)?;

        self.require_team_permission(&request.actor, &request.team_id, Action::Destroy)
            .await?;

        self.repository
            .delete_team(DeleteTeamInput {
                team_id: request.team_id.clone(),
            })
            .await?;

        debug!(team_id = %request.team_id, "team deleted");
        Ok(())
    }

    async fn require_team_permission(
        &self,
        actor: &Actor,
        team_id: &str,
        action: Action,
    ) -> DomainResult<()> {
        let membership = self
            .repository
            .get_membership(GetMembershipInput {
                team_id: team_id.to_string(),
                user_id: actor.id.clone(),
            })
            .await?
            .map(|membership| membership.role);

        self.authorization_provider
            .require_permission(actor, Resource::Team { membership }, action)
    }
}
