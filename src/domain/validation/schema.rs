//! Record schema for registration payloads
//!
//! Checks the structural shape of the request first, then runs each field's
//! policy on the values that are well formed.

use super::policy::FieldPolicy;
use super::types::{ValidationError, ValidationErrors};
use crate::domain::registration::RegistrationRequest;
use crate::shared::error::AppResult;
use serde_json::{json, Map, Value};
use validator::ValidateEmail;

const USERNAME: &str = "username";
const EMAIL: &str = "email";
const PASSWORD: &str = "password";
const FULL_NAME: &str = "fullName";
const FULL_NAME_ALIAS: &str = "full_name";

/// Registration schema with its field policies, built once at startup
#[derive(Debug, Clone)]
pub struct RegistrationSchema {
    username: FieldPolicy,
    password: FieldPolicy,
    full_name: FieldPolicy,
}

impl RegistrationSchema {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            username: FieldPolicy::username()?,
            password: FieldPolicy::password()?,
            full_name: FieldPolicy::full_name()?,
        })
    }

    /// Validate a raw payload into a registration request
    pub fn validate(&self, payload: &Value) -> Result<RegistrationRequest, ValidationErrors> {
        let object = match payload {
            Value::Object(object) => object,
            other => {
                return Err(ValidationErrors::single(ValidationError::malformed_body(&format!(
                    "got {}",
                    json_type_name(other)
                ))))
            }
        };

        let mut errors = ValidationErrors::new();

        let username = required_string(object, USERNAME, &mut errors)
            .and_then(|value| record(self.username.check(value), value, &mut errors));

        let email = required_string(object, EMAIL, &mut errors).and_then(|value| {
            let checked = if value.validate_email() {
                Ok(())
            } else {
                Err(ValidationError::invalid_email(value))
            };
            record(checked, value, &mut errors)
        });

        let password = required_string(object, PASSWORD, &mut errors)
            .and_then(|value| record(self.password.check(value), value, &mut errors));

        let full_name = match optional_string(object, &[FULL_NAME, FULL_NAME_ALIAS], &mut errors) {
            OptionalField::Absent => Some(None),
            OptionalField::Invalid => None,
            OptionalField::Present(value) => {
                record(self.full_name.check(value), value, &mut errors).map(Some)
            }
        };

        match (username, email, password, full_name) {
            (Some(username), Some(email), Some(password), Some(full_name)) if errors.is_empty() => {
                Ok(RegistrationRequest {
                    username,
                    email,
                    password,
                    full_name,
                })
            }
            _ => Err(errors),
        }
    }

    /// Describe the active policies, keyed the way the rules endpoint reports them
    pub fn describe(&self) -> Value {
        json!({
            "password_rules": self.password.describe(),
            "username_rules": self.username.describe(),
            "email_rules": { "syntax_checked": true },
            "full_name_rules": self.full_name.describe(),
        })
    }

    pub fn policies(&self) -> [&FieldPolicy; 3] {
        [&self.username, &self.password, &self.full_name]
    }
}

enum OptionalField<'a> {
    Absent,
    Invalid,
    Present(&'a str),
}

fn required_string<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<&'a str> {
    match object.get(field) {
        None | Some(Value::Null) => {
            errors.push(ValidationError::missing(field));
            None
        }
        Some(Value::String(value)) => Some(value.as_str()),
        Some(other) => {
            errors.push(ValidationError::wrong_type(field, other));
            None
        }
    }
}

fn optional_string<'a>(
    object: &'a Map<String, Value>,
    names: &[&str],
    errors: &mut ValidationErrors,
) -> OptionalField<'a> {
    let found = names
        .iter()
        .find_map(|name| object.get(*name).map(|value| (*name, value)));

    match found {
        None | Some((_, Value::Null)) => OptionalField::Absent,
        Some((_, Value::String(value))) => OptionalField::Present(value.as_str()),
        Some((name, other)) => {
            errors.push(ValidationError::wrong_type(name, other));
            OptionalField::Invalid
        }
    }
}

fn record(
    outcome: Result<(), ValidationError>,
    value: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match outcome {
        Ok(()) => Some(value.to_string()),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
