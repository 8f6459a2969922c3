//! Registration Validator - user registration API with rule-based input validation
//!
//! This library validates registration payloads against declarative field
//! policies, stores accepted users in memory and serves the result over HTTP.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
