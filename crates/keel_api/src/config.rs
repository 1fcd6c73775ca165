use common::telemetry::TelemetryConfig;
use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::domain::TeamServiceConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON logs
    #[serde(default = "default_log_json")]
    pub log_json: bool,

    /// Service name reported in logs
    #[serde(default = "default_service_name")]
    pub service_name: String,

    // Billing configuration
    /// Plan assigned to newly provisioned teams
    #[serde(default = "default_billing_default_plan")]
    pub billing_default_plan: String,

    /// Length of the trial for new teams in days (0 disables the trial)
    #[serde(default = "default_billing_trial_days")]
    pub billing_trial_days: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_json() -> bool {
    true
}

fn default_service_name() -> String {
    "keel-api".to_string()
}

fn default_billing_default_plan() -> String {
    "free".to_string()
}

fn default_billing_trial_days() -> u32 {
    14
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("KEEL"))
            .build()?
            .try_deserialize()
    }

    pub fn telemetry_config(&self) -> TelemetryConfig {
        TelemetryConfig {
            service_name: self.service_name.clone(),
            log_level: self.log_level.clone(),
            json: self.log_json,
        }
    }

    pub fn team_service_config(&self) -> TeamServiceConfig {
        TeamServiceConfig {
            default_plan: self.billing_default_plan.clone(),
            trial_days: self.billing_trial_days,
        }
    }
}
