use crate::application::services::RegistrationService;
use serde_json::Value;
use std::sync::Arc;

/// Use case for reporting the active validation rules
pub struct DescribeRulesUseCase {
    registration_service: Arc<RegistrationService>,
}

impl DescribeRulesUseCase {
    pub fn new(registration_service: Arc<RegistrationService>) -> Self {
        Self { registration_service }
    }

    pub fn execute(&self) -> Value {
        self.registration_service.validation_rules()
    }
}
