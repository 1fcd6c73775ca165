mod notification_event_service;
mod profile_service;
mod team_service;
mod user_admin_service;

pub use notification_event_service::*;
pub use profile_service::*;
pub use team_service::*;
pub use user_admin_service::*;
