//! Rejection recovery
//!
//! Maps warp rejections to the service's JSON error bodies.

use crate::{
    domain::validation::{ValidationError, ValidationErrors},
    infrastructure::http::responses::ResponseFormatter,
    shared::error::AppError,
};
use std::convert::Infallible;
use std::error::Error as _;
use tracing::{debug, error};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Rejection;

/// Convert a rejection into a response. Never fails.
pub async fn handle_rejection(rejection: Rejection) -> Result<Response, Infallible> {
    let response = if rejection.is_not_found() {
        ResponseFormatter::error(StatusCode::NOT_FOUND, "Not found")
    } else if let Some(e) = rejection.find::<warp::filters::body::BodyDeserializeError>() {
        let detail = e
            .source()
            .map(|source| source.to_string())
            .unwrap_or_else(|| e.to_string());
        debug!(error = %detail, "Malformed request body");
        ResponseFormatter::validation_failed(
            &ValidationErrors::single(ValidationError::malformed_body(&detail)),
            StatusCode::BAD_REQUEST,
        )
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        ResponseFormatter::error(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        ResponseFormatter::error(StatusCode::LENGTH_REQUIRED, "Content-Length header required")
    } else if rejection.find::<warp::reject::UnsupportedMediaType>().is_some() {
        ResponseFormatter::error(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Content-Type must be application/json")
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        ResponseFormatter::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if let Some(app_error) = rejection.find::<AppError>() {
        ResponseFormatter::from_app_error(app_error)
    } else {
        error!(rejection = ?rejection, "Unhandled rejection");
        ResponseFormatter::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(response)
}
