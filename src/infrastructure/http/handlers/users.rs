//! Registration handler

use crate::{
    application::use_cases::RegisterUserUseCase,
    config::AppConfig,
    infrastructure::http::{models::RequestContext, responses::ResponseFormatter, utils::extract_client_ip},
    shared::{error::AppError, logging::LoggingUtils},
};
use serde_json::Value;
use std::sync::Arc;
use warp::reply::Response;

const ROUTE: &str = "POST /users";

/// Handle `POST /users`
pub async fn handle_register_request(
    payload: Value,
    forwarded_for: Option<String>,
    user_agent: Option<String>,
    register_use_case: Arc<RegisterUserUseCase>,
    config: AppConfig,
) -> Result<Response, warp::reject::Rejection> {
    let context = RequestContext::new(extract_client_ip(forwarded_for.as_deref()), ROUTE)
        .with_user_agent(user_agent);

    if config.security.enable_request_logging {
        LoggingUtils::log_request(
            &context.request_id,
            &context.route,
            &context.client_ip,
            context.user_agent.as_deref(),
        );
    }

    let response = match register_use_case.execute(&payload).await {
        Ok(profile) => {
            LoggingUtils::log_registration(&context.request_id, &profile.username, context.elapsed_ms());
            ResponseFormatter::created(&profile)
        }
        Err(AppError::InvalidRegistration(errors)) => {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            LoggingUtils::log_rejection(&context.request_id, &fields, context.elapsed_ms());
            ResponseFormatter::validation_failed(&errors, warp::http::StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => {
            LoggingUtils::log_error(&context.request_id, &context.route, &e, context.elapsed_ms());
            ResponseFormatter::from_app_error(&e)
        }
    };

    Ok(response)
}
