//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::use_cases::{DescribeRulesUseCase, HealthCheckUseCase, RegisterUserUseCase},
    config::AppConfig,
    infrastructure::http::{
        handlers::handle_rejection,
        routes::{HealthRoutes, RulesRoutes, UserRoutes},
    },
    middleware::SecurityHeadersMiddleware,
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes, with rejection recovery and security headers
    pub fn build_routes(
        config: AppConfig,
        register_use_case: Arc<RegisterUserUseCase>,
        rules_use_case: Arc<DescribeRulesUseCase>,
        health_use_case: Arc<HealthCheckUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
        let security_headers = SecurityHeadersMiddleware::new(&config).headers();

        let register_route = UserRoutes::create_register_route(config, register_use_case);
        let rules_route = RulesRoutes::create_rules_route(rules_use_case);
        let health_route = HealthRoutes::create_health_route(health_use_case);
        let root_route = HealthRoutes::create_root_route();

        register_route
            .or(rules_route)
            .or(health_route)
            .or(root_route)
            .recover(handle_rejection)
            .with(warp::reply::with::headers(security_headers))
    }
}
