//! HTTP server implementation
//!
//! Wires the user store, registration service and use cases together and
//! serves the registration API with warp.

use crate::{
    application::{
        services::{MetricsService, RegistrationService},
        use_cases::{DescribeRulesUseCase, HealthCheckUseCase, RegisterUserUseCase},
    },
    config::AppConfig,
    infrastructure::{
        adapters::{InMemoryUserStore, UserStore},
        http::routes::RouteBuilder,
    },
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server for the registration API
pub struct HttpServer {
    config: AppConfig,
    register_use_case: Arc<RegisterUserUseCase>,
    rules_use_case: Arc<DescribeRulesUseCase>,
    health_use_case: Arc<HealthCheckUseCase>,
}

impl HttpServer {
    /// Create a new HTTP server instance backed by an in-memory user store
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        Self::with_store(config, store)
    }

    /// Create a server instance on top of an existing user store
    pub fn with_store(config: AppConfig, store: Arc<dyn UserStore>) -> AppResult<Self> {
        // Initialize application layer
        let registration_service = Arc::new(RegistrationService::from_config(&config, store)?);
        let metrics_service = Arc::new(MetricsService::new());

        // Initialize use cases
        let register_use_case = Arc::new(RegisterUserUseCase::new(
            registration_service.clone(),
            metrics_service.clone(),
        ));
        let rules_use_case = Arc::new(DescribeRulesUseCase::new(registration_service.clone()));
        let health_use_case = Arc::new(HealthCheckUseCase::new(registration_service, metrics_service));

        Ok(Self {
            config,
            register_use_case,
            rules_use_case,
            health_use_case,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until the process is stopped
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        info!("Starting registration server on {}", addr);
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(&self) -> impl Filter<Extract = impl Reply, Error = std::convert::Infallible> + Clone {
        RouteBuilder::build_routes(
            self.config.clone(),
            self.register_use_case.clone(),
            self.rules_use_case.clone(),
            self.health_use_case.clone(),
        )
    }
}
