//! Domain validation module
//!
//! Predicate library, field policies and the registration record schema.
//! Everything here is pure and synchronous.

pub mod types;
pub mod predicates;
pub mod policy;
pub mod schema;

pub use types::{
    RuleVerdict,
    StructuralReason,
    ValidationError,
    ValidationErrorKind,
    ValidationErrors,
};
pub use predicates::{CharClass, Predicate, DEFAULT_SPECIAL_CHARS};
pub use policy::{FieldPolicy, ValidationRule};
pub use schema::RegistrationSchema;
