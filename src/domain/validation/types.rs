use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Field absent or not of the expected primitive type
    StructuralError,
    /// Well-formed value rejected by a rule of its field policy
    PolicyViolation,
    /// Email rejected by the email syntax checker
    EmailSyntaxError,
}

/// Why a field failed the structural check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralReason {
    Missing,
    WrongType,
}

/// Outcome of applying one rule to one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    pub passed: bool,
    pub message: String,
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,

    pub field: String,

    pub message: String,

    /// Offending input rendered as text, `None` when the field was absent
    pub rejected_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<StructuralReason>,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: ValidationErrorKind::StructuralError,
            field: field.to_string(),
            message: "Field required".to_string(),
            rejected_value: None,
            reason: Some(StructuralReason::Missing),
        }
    }

    pub fn wrong_type(field: &str, rejected: &serde_json::Value) -> Self {
        Self {
            kind: ValidationErrorKind::StructuralError,
            field: field.to_string(),
            message: "Input should be a valid string".to_string(),
            rejected_value: Some(rejected.to_string()),
            reason: Some(StructuralReason::WrongType),
        }
    }

    pub fn malformed_body(detail: &str) -> Self {
        Self {
            kind: ValidationErrorKind::StructuralError,
            field: "body".to_string(),
            message: format!("Request body must be a JSON object: {}", detail),
            rejected_value: None,
            reason: Some(StructuralReason::WrongType),
        }
    }

    pub fn policy_violation(field: &str, message: &str, rejected: &str) -> Self {
        Self {
            kind: ValidationErrorKind::PolicyViolation,
            field: field.to_string(),
            message: message.to_string(),
            rejected_value: Some(rejected.to_string()),
            reason: None,
        }
    }

    pub fn invalid_email(rejected: &str) -> Self {
        Self {
            kind: ValidationErrorKind::EmailSyntaxError,
            field: "email".to_string(),
            message: "value is not a valid email address".to_string(),
            rejected_value: Some(rejected.to_string()),
            reason: None,
        }
    }

    pub fn is_structural(&self) -> bool {
        self.kind == ValidationErrorKind::StructuralError
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of failures, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: ValidationError) -> Self {
        Self { errors: vec![error] }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First error reported for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}
