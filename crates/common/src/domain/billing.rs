use crate::domain::result::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Billing customer created for a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingCustomer {
    pub id: String,
    pub team_id: String,
    pub plan: String,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

/// Input for creating a billing customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBillingCustomerInput {
    pub team_id: String,
    pub email: String,
    pub plan: String,
    pub trial_ends_at: Option<DateTime<Utc>>,
}

/// External billing system (payment processor)
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait BillingProvider: Send + Sync {
    /// Register the team with the billing system
    async fn create_customer(
        &self,
        input: CreateBillingCustomerInput,
    ) -> DomainResult<BillingCustomer>;
}
