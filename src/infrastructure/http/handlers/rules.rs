//! Validation rules handler

use crate::{
    application::use_cases::DescribeRulesUseCase,
    infrastructure::http::responses::ResponseFormatter,
};
use std::sync::Arc;
use warp::reply::Response;

/// Handle `GET /validation-rules`
pub async fn handle_validation_rules_request(
    rules_use_case: Arc<DescribeRulesUseCase>,
) -> Result<Response, warp::reject::Rejection> {
    Ok(ResponseFormatter::json(&rules_use_case.execute(), warp::http::StatusCode::OK))
}
