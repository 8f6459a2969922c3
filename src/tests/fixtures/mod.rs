//! Registration payload fixtures

use serde_json::{json, Value};

/// A payload that passes every rule
pub fn valid_registration() -> Value {
    json!({
        "username": "johndoe123",
        "email": "john@example.com",
        "password": "SecurePass123!",
        "fullName": "John Doe"
    })
}

/// A valid payload without the optional full name
pub fn minimal_registration() -> Value {
    json!({
        "username": "janedoe",
        "email": "jane@example.com",
        "password": "Str0ng!Pass"
    })
}

/// The valid payload with one field replaced
pub fn registration_with(field: &str, value: Value) -> Value {
    let mut payload = valid_registration();
    payload[field] = value;
    payload
}

/// The valid payload with one field removed
pub fn registration_without(field: &str) -> Value {
    let mut payload = valid_registration();
    if let Some(object) = payload.as_object_mut() {
        object.remove(field);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_helpers() {
        assert_eq!(registration_with("username", json!("x"))["username"], "x");
        assert!(registration_without("email").get("email").is_none());
        assert!(minimal_registration().get("fullName").is_none());
    }
}
