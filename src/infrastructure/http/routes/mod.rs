//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod builder;
pub mod users;
pub mod rules;
pub mod health;

pub use builder::RouteBuilder;
pub use users::UserRoutes;
pub use rules::RulesRoutes;
pub use health::HealthRoutes;
