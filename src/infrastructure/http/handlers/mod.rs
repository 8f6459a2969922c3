//! HTTP route handlers module
//!
//! This module contains separate handlers for each endpoint, plus the
//! rejection handler that turns warp rejections into JSON responses.

pub mod users;
pub mod rules;
pub mod health;
pub mod root;
pub mod rejection;

pub use users::handle_register_request;
pub use rules::handle_validation_rules_request;
pub use health::handle_health_request;
pub use root::handle_root_request;
pub use rejection::handle_rejection;
