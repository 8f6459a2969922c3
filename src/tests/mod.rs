//! Test suite for the registration service
//!
//! This module provides:
//! - Integration tests for the HTTP endpoints
//! - Security tests for response hardening and password storage
//! - Property tests for the validation policies
//! - Payload fixtures shared across modules

pub mod fixtures;
pub mod integration;
pub mod property;
pub mod security;

/// Test configuration and utilities
pub mod config {
    use crate::application::services::RegistrationService;
    use crate::config::AppConfig;
    use crate::infrastructure::adapters::InMemoryUserStore;
    use std::sync::{Arc, Once};

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration with cheap hashing parameters
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();

        config.server.port = 0; // Use random port
        config.security.enable_request_logging = false;
        config.hashing.memory_kib = 64;
        config.hashing.iterations = 1;
        config.hashing.parallelism = 1;

        config
    }

    /// Registration service over a fresh in-memory store
    pub fn test_registration_service(config: &AppConfig) -> Arc<RegistrationService> {
        let store = Arc::new(InMemoryUserStore::new());
        Arc::new(RegistrationService::from_config(config, store).expect("test registration service"))
    }
}

/// Test result types
pub type TestResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert!(!test_config.security.enable_request_logging);
        assert!(test_config.security.enable_security_headers);
        assert_eq!(test_config.hashing.iterations, 1);
    }

    #[test]
    fn test_registration_service_starts_empty() {
        let service = config::test_registration_service(&config::test_config());
        let count = tokio_test::block_on(service.registered_count()).unwrap();
        assert_eq!(count, 0);
    }
}
