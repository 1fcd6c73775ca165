mod actor;
mod authorization_service;
mod rbac_policy;
mod role_transition;
mod roles;
mod scope;
mod self_edit;

pub use actor::*;
pub use authorization_service::*;
pub use rbac_policy::*;
pub use role_transition::*;
pub use roles::*;
pub use scope::*;
pub use self_edit::*;
