//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::AppError;
use tracing::{error, info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str, format: &str, structured: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(structured)
            .with_line_number(structured)
            .with_ansi(false);

        let result = if format.eq_ignore_ascii_case("json") {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an incoming request with structured data
    pub fn log_request(request_id: &str, route: &str, client_ip: &str, user_agent: Option<&str>) {
        info!(
            request_id = %request_id,
            route = %route,
            client_ip = %client_ip,
            user_agent = user_agent,
            "Processing request"
        );
    }

    /// Log a successful registration. Never pass password material here.
    pub fn log_registration(request_id: &str, username: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            username = %username,
            duration_ms = %duration_ms,
            "User registered"
        );
    }

    /// Log a registration rejected by validation
    pub fn log_rejection(request_id: &str, fields: &[&str], duration_ms: u64) {
        warn!(
            request_id = %request_id,
            fields = ?fields,
            duration_ms = %duration_ms,
            "Registration rejected by validation"
        );
    }

    /// Log an error response
    pub fn log_error(request_id: &str, route: &str, error: &AppError, duration_ms: u64) {
        error!(
            request_id = %request_id,
            route = %route,
            error = %error,
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
