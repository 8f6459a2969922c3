use crate::{
    application::services::{MetricsService, RegistrationService},
    domain::health::*,
    shared::error::AppResult,
};
use serde_json::json;
use std::sync::Arc;

/// Health check use case
pub struct HealthCheckUseCase {
    registration_service: Arc<RegistrationService>,
    metrics_service: Arc<MetricsService>,
}

impl HealthCheckUseCase {
    pub fn new(registration_service: Arc<RegistrationService>, metrics_service: Arc<MetricsService>) -> Self {
        Self {
            registration_service,
            metrics_service,
        }
    }

    /// Execute health check, probing the user store
    pub async fn execute(&self) -> AppResult<HealthResponse> {
        let mut details = json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "metrics": self.metrics_service.get_metrics(),
        });

        let status = match self.registration_service.registered_count().await {
            Ok(count) => {
                details["registered_users"] = json!(count);
                HealthStatus::Healthy
            }
            Err(e) => {
                details["store_error"] = json!(e.to_string());
                HealthStatus::Unhealthy
            }
        };

        Ok(HealthResponse::new(status, details))
    }
}
