//! HTTP utilities - Common helper functions
//!
//! This module contains utility functions used across the HTTP infrastructure
//! for client IP extraction and dependency injection into routes.

use crate::application::use_cases::{DescribeRulesUseCase, HealthCheckUseCase, RegisterUserUseCase};
use crate::config::AppConfig;
use std::sync::Arc;
use warp::Filter;

const UNKNOWN_CLIENT: &str = "unknown";

/// Pick the originating client from an `X-Forwarded-For` header value
pub fn extract_client_ip(forwarded_for: Option<&str>) -> String {
    forwarded_for
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .and_then(|candidate| candidate.parse::<std::net::IpAddr>().ok())
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Helper function to inject configuration into route
pub fn with_config(
    config: AppConfig,
) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}

/// Helper function to inject the registration use case into route
pub fn with_register_use_case(
    use_case: Arc<RegisterUserUseCase>,
) -> impl Filter<Extract = (Arc<RegisterUserUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}

/// Helper function to inject the rules use case into route
pub fn with_rules_use_case(
    use_case: Arc<DescribeRulesUseCase>,
) -> impl Filter<Extract = (Arc<DescribeRulesUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}

/// Helper function to inject the health check use case into route
pub fn with_health_use_case(
    use_case: Arc<HealthCheckUseCase>,
) -> impl Filter<Extract = (Arc<HealthCheckUseCase>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}
