//! Registration domain models

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status reported for every record that made it through validation
pub const VALIDATION_STATUS_PASSED: &str = "passed";

/// A registration request whose fields have passed every policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Record appended to the user store. Holds a password hash, never the plaintext.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub join_timestamp: DateTime<Utc>,
    pub password_hash: String,
}

impl StoredUser {
    pub fn from_request(request: RegistrationRequest, password_hash: String) -> Self {
        Self {
            username: request.username,
            email: request.email,
            full_name: request.full_name,
            join_timestamp: Utc::now(),
            password_hash,
        }
    }

    /// Outward-facing projection
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            username: self.username.clone(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            join_timestamp: self.join_timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            validation_status: VALIDATION_STATUS_PASSED.to_string(),
        }
    }
}

/// Public view of a stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub join_timestamp: String,
    pub validation_status: String,
}
