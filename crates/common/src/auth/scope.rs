//! Scope resolution: which records of a collection an actor may see.
//!
//! Both resolvers are filters over a collection the caller already loaded.
//! Nothing here issues queries, so there is no branch through which records
//! can reach an actor without passing the filter.

use std::collections::HashSet;

use crate::auth::Actor;
use crate::domain::{Team, TeamMembership};

/// Staff-gated scope: staff see the whole collection, everyone else sees
/// nothing. Never returns a partial collection.
pub fn resolve_scope<T>(actor: &Actor, collection: Vec<T>) -> Vec<T> {
    let visible = actor.system_role.is_staff();
    collection.into_iter().filter(|_| visible).collect()
}

/// Team scope: staff see every team, other actors only the teams they hold
/// a membership in.
pub fn resolve_team_scope(
    actor: &Actor,
    teams: Vec<Team>,
    memberships: &[TeamMembership],
) -> Vec<Team> {
    if actor.system_role.is_staff() {
        return teams;
    }
    let member_of: HashSet<&str> = memberships
        .iter()
        .filter(|membership| membership.user_id == actor.id)
        .map(|membership| membership.team_id.as_str())
        .collect();
    teams
        .into_iter()
        .filter(|team| member_of.contains(team.id.as_str()))
        .collect()
}
