//! HTTP responses module
//!
//! This module contains HTTP response formatting and utilities.

use crate::{
    domain::{registration::UserProfile, validation::ValidationErrors},
    infrastructure::http::models::{ErrorBody, ValidationErrorBody},
    shared::error::AppError,
};
use serde::Serialize;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Serialize a body with the given status
    pub fn json<T: Serialize>(body: &T, status: StatusCode) -> Response {
        warp::reply::with_status(warp::reply::json(body), status).into_response()
    }

    /// Successful registration
    pub fn created(profile: &UserProfile) -> Response {
        Self::json(profile, StatusCode::CREATED)
    }

    /// Validation failure listing every rejected field
    pub fn validation_failed(errors: &ValidationErrors, status: StatusCode) -> Response {
        Self::json(&ValidationErrorBody::from(errors), status)
    }

    /// Plain error message
    pub fn error(status: StatusCode, message: &str) -> Response {
        Self::json(&ErrorBody::new(status.as_u16(), message), status)
    }

    /// Format an application error. Server-side details are not exposed.
    pub fn from_app_error(error: &AppError) -> Response {
        let status = error.http_status_code();
        match error {
            AppError::InvalidRegistration(errors) => Self::validation_failed(errors, status),
            _ => Self::error(status, &Self::public_message(error)),
        }
    }

    /// Message safe to return to the client for a non-validation error
    pub fn public_message(error: &AppError) -> String {
        match error {
            AppError::Validation(message) => message.clone(),
            AppError::InvalidRegistration(errors) => errors.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}
