mod billing;
mod notification_event;
mod result;
mod team;
mod user;

pub use billing::*;
pub use notification_event::*;
pub use result::*;
pub use team::*;
pub use user::*;
