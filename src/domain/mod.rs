//! Domain layer - Core business logic and domain models
//!
//! This module contains the validation rule engine and the registration
//! models, independent of HTTP and storage concerns.

pub mod validation;
pub mod registration;
pub mod health;

pub use validation::{
    FieldPolicy, Predicate, RegistrationSchema, ValidationError, ValidationErrorKind,
    ValidationErrors, ValidationRule,
};
pub use registration::{RegistrationRequest, StoredUser, UserProfile};
pub use health::{HealthStatus, HealthResponse};
