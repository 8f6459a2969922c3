use crate::{
    application::services::{MetricsService, RegistrationService},
    domain::registration::UserProfile,
    shared::error::{AppError, AppResult},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for registering a new user
pub struct RegisterUserUseCase {
    registration_service: Arc<RegistrationService>,
    metrics_service: Arc<MetricsService>,
}

impl RegisterUserUseCase {
    pub fn new(registration_service: Arc<RegistrationService>, metrics_service: Arc<MetricsService>) -> Self {
        Self {
            registration_service,
            metrics_service,
        }
    }

    /// Execute the registration and record its outcome
    pub async fn execute(&self, payload: &Value) -> AppResult<UserProfile> {
        let result = self.registration_service.register(payload).await;

        match &result {
            Ok(_) => {
                self.metrics_service.record_accepted();
                debug!("Registration accepted");
            }
            Err(AppError::InvalidRegistration(errors)) => {
                self.metrics_service.record_rejected();
                debug!(error_count = errors.len(), "Registration rejected");
            }
            Err(e) => {
                self.metrics_service.record_failed();
                warn!("Registration failed: {}", e);
            }
        }

        result
    }
}
