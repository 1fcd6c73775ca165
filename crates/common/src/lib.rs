//! Shared building blocks for Keel services: domain entities and repository
//! traits, the role-based authorization core, request validation and
//! telemetry setup.

pub mod auth;
pub mod domain;
pub mod garde;
pub mod telemetry;

// Re-export mocks when testing feature is enabled
#[cfg(any(test, feature = "testing"))]
pub use auth::MockAuthorizationProvider;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockBillingProvider;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockNotificationEventRepository;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockTeamRepository;
#[cfg(any(test, feature = "testing"))]
pub use domain::MockUserRepository;
