pub mod config;
pub mod domain;

pub use crate::config::ServiceConfig;
pub use domain::*;
