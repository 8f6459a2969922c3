//! Application services module
//!
//! This module contains application services that orchestrate domain logic.

pub mod registration_service;
pub mod metrics_service;

pub use registration_service::RegistrationService;
pub use metrics_service::MetricsService;
