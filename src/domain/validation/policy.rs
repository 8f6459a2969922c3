//! Field validator
//!
//! A `FieldPolicy` is an ordered list of rules bound to a field name. Rules are
//! evaluated in order and the first failure is reported.

use super::predicates::{CharClass, Predicate, DEFAULT_SPECIAL_CHARS};
use super::types::{RuleVerdict, ValidationError};
use crate::shared::error::AppResult;
use serde_json::{Map, Value};

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;
pub const FULL_NAME_MIN_LENGTH: usize = 2;
pub const FULL_NAME_MAX_LENGTH: usize = 50;

/// A predicate paired with its fixed failure message
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub predicate: Predicate,
    pub message: String,
}

impl ValidationRule {
    pub fn new(predicate: Predicate, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    pub fn apply(&self, value: &str) -> RuleVerdict {
        RuleVerdict {
            passed: self.predicate.test(value),
            message: self.message.clone(),
        }
    }
}

/// Ordered rules for one field
#[derive(Debug, Clone)]
pub struct FieldPolicy {
    field: String,
    rules: Vec<ValidationRule>,
    optional: bool,
}

impl FieldPolicy {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rules: Vec::new(),
            optional: false,
        }
    }

    pub fn rule(mut self, predicate: Predicate, message: impl Into<String>) -> Self {
        self.rules.push(ValidationRule::new(predicate, message));
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Password strength policy
    pub fn password() -> AppResult<Self> {
        Ok(Self::new("password")
            .rule(
                Predicate::min_length(PASSWORD_MIN_LENGTH),
                format!("Password must be at least {} characters long", PASSWORD_MIN_LENGTH),
            )
            .rule(
                Predicate::contains_uppercase()?,
                "Password must contain at least one uppercase letter",
            )
            .rule(
                Predicate::contains_lowercase()?,
                "Password must contain at least one lowercase letter",
            )
            .rule(Predicate::contains_digit()?, "Password must contain at least one number")
            .rule(
                Predicate::contains_special_char(DEFAULT_SPECIAL_CHARS)?,
                "Password must contain at least one special character",
            ))
    }

    /// Username format policy. The alphanumeric rule runs before the length rules.
    pub fn username() -> AppResult<Self> {
        Ok(Self::new("username")
            .rule(
                Predicate::is_alphanumeric_only()?,
                "Username must be alphanumeric (letters and numbers only)",
            )
            .rule(
                Predicate::min_length(USERNAME_MIN_LENGTH),
                format!("Username must be at least {} characters long", USERNAME_MIN_LENGTH),
            )
            .rule(
                Predicate::max_length(USERNAME_MAX_LENGTH),
                format!("Username must be at most {} characters long", USERNAME_MAX_LENGTH),
            ))
    }

    /// Full name format policy, only applied when a full name is supplied
    pub fn full_name() -> AppResult<Self> {
        Ok(Self::new("fullName")
            .optional()
            .rule(
                Predicate::consists_of(CharClass::NameCharacters)?,
                "Full name can only contain letters, spaces, hyphens, apostrophes, and periods",
            )
            .rule(
                Predicate::min_length(FULL_NAME_MIN_LENGTH),
                format!("Full name must be at least {} characters long", FULL_NAME_MIN_LENGTH),
            )
            .rule(
                Predicate::max_length(FULL_NAME_MAX_LENGTH),
                format!("Full name must be at most {} characters long", FULL_NAME_MAX_LENGTH),
            ))
    }

    /// Evaluate rules in order, stopping at the first failure
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        for rule in &self.rules {
            let verdict = rule.apply(value);
            if !verdict.passed {
                return Err(ValidationError::policy_violation(&self.field, &verdict.message, value));
            }
        }
        Ok(())
    }

    /// Evaluate every rule and collect all failures in rule order
    pub fn check_all(&self, value: &str) -> Vec<ValidationError> {
        self.rules
            .iter()
            .map(|rule| rule.apply(value))
            .filter(|verdict| !verdict.passed)
            .map(|verdict| ValidationError::policy_violation(&self.field, &verdict.message, value))
            .collect()
    }

    /// Describe the thresholds of this policy as a JSON object
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        for rule in &self.rules {
            rule.predicate.describe_into(&mut out);
        }
        if self.optional {
            out.insert("optional".to_string(), Value::Bool(true));
        }
        Value::Object(out)
    }
}
