//! Property tests for the validation policies

use crate::domain::validation::{FieldPolicy, RegistrationSchema};
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn prop_short_passwords_fail_on_length(password in ".{0,7}") {
        let policy = FieldPolicy::password().unwrap();
        let error = policy.check(&password).unwrap_err();
        prop_assert_eq!(error.message, "Password must be at least 8 characters long");
    }

    #[test]
    fn prop_strong_passwords_pass(
        upper in "[A-Z]",
        lower in "[a-z]",
        digit in "[0-9]",
        special in "[!@#$%^&*]",
        rest in "[a-zA-Z0-9]{4,20}",
    ) {
        let password = format!("{}{}{}{}{}", rest, upper, special, lower, digit);
        let policy = FieldPolicy::password().unwrap();
        prop_assert!(policy.check(&password).is_ok());
    }

    #[test]
    fn prop_alphanumeric_usernames_pass(username in "[a-zA-Z0-9]{3,20}") {
        let policy = FieldPolicy::username().unwrap();
        prop_assert!(policy.check(&username).is_ok());
    }

    #[test]
    fn prop_usernames_with_symbols_fail_alphanumeric_rule(
        head in "[a-z]{1,8}",
        symbol in "[_\\-. !@]",
        tail in "[a-z]{1,8}",
    ) {
        let username = format!("{}{}{}", head, symbol, tail);
        let policy = FieldPolicy::username().unwrap();
        let error = policy.check(&username).unwrap_err();
        prop_assert!(error.message.starts_with("Username must be alphanumeric"));
    }

    #[test]
    fn prop_validation_is_deterministic(
        username in "[a-zA-Z0-9_]{0,24}",
        password in "[a-zA-Z0-9!@#]{0,16}",
    ) {
        let schema = RegistrationSchema::new().unwrap();
        let payload = json!({
            "username": username,
            "email": "user@example.com",
            "password": password
        });
        prop_assert_eq!(schema.validate(&payload), schema.validate(&payload));
    }
}
