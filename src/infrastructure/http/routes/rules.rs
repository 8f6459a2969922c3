//! Validation rules routes

use crate::{
    application::use_cases::DescribeRulesUseCase,
    infrastructure::http::{handlers::handle_validation_rules_request, utils::with_rules_use_case},
};
use std::sync::Arc;
use warp::Filter;

/// Validation rules routes configuration
pub struct RulesRoutes;

impl RulesRoutes {
    /// Create the `GET /validation-rules` route
    pub fn create_rules_route(
        rules_use_case: Arc<DescribeRulesUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("validation-rules")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_rules_use_case(rules_use_case))
            .and_then(handle_validation_rules_request)
    }
}
