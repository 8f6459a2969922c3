//! HTTP models module
//!
//! Wire-level bodies and per-request context.

use crate::domain::validation::{ValidationError, ValidationErrors};
use crate::shared::logging::LoggingUtils;
use serde::{Deserialize, Serialize};

/// Body returned when a registration fails validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<ValidationError>,
}

impl From<&ValidationErrors> for ValidationErrorBody {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors.errors.clone(),
        }
    }
}

/// Body returned for any other error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
}

impl ErrorBody {
    pub fn new(code: u16, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

/// Request context for tracking and logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID
    pub request_id: String,

    /// Client IP address
    pub client_ip: String,

    /// User agent
    pub user_agent: Option<String>,

    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,

    /// Route label, e.g. "POST /users"
    pub route: String,
}

impl RequestContext {
    pub fn new(client_ip: String, route: &str) -> Self {
        Self {
            request_id: LoggingUtils::generate_request_id(),
            client_ip,
            user_agent: None,
            timestamp: chrono::Utc::now(),
            route: route.to_string(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Milliseconds since the request was received
    pub fn elapsed_ms(&self) -> u64 {
        (chrono::Utc::now() - self.timestamp).num_milliseconds().max(0) as u64
    }
}
