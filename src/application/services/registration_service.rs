//! Registration service
//!
//! Validates a raw payload against the registration schema, hashes the
//! password and appends the record to the user store.

use crate::{
    config::AppConfig,
    domain::{
        registration::{StoredUser, UserProfile},
        validation::RegistrationSchema,
    },
    infrastructure::adapters::{PasswordHasher, UserStore},
    shared::error::{AppError, AppResult},
};
use serde_json::Value;
use std::sync::Arc;

/// Orchestrates validation, hashing and storage of new users
pub struct RegistrationService {
    schema: Arc<RegistrationSchema>,
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl RegistrationService {
    pub fn new(schema: Arc<RegistrationSchema>, store: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { schema, store, hasher }
    }

    /// Build the service from configuration with the given store
    pub fn from_config(config: &AppConfig, store: Arc<dyn UserStore>) -> AppResult<Self> {
        let schema = Arc::new(RegistrationSchema::new()?);
        let hasher = PasswordHasher::new(&config.hashing)?;
        Ok(Self::new(schema, store, hasher))
    }

    /// Validate and store a registration, returning the public projection
    pub async fn register(&self, payload: &Value) -> AppResult<UserProfile> {
        let request = self.schema.validate(payload).map_err(AppError::InvalidRegistration)?;

        let password_hash = self.hasher.hash_blocking(request.password.clone()).await?;
        let user = StoredUser::from_request(request, password_hash);
        let profile = user.profile();

        self.store.append(user).await?;

        Ok(profile)
    }

    /// Active validation rules, derived from the field policies
    pub fn validation_rules(&self) -> Value {
        self.schema.describe()
    }

    pub async fn registered_count(&self) -> AppResult<usize> {
        self.store.count().await
    }

    pub fn schema(&self) -> &RegistrationSchema {
        &self.schema
    }
}
