//! Integration tests for the HTTP endpoints
//!
//! Requests go through the full filter chain built by `HttpServer`,
//! including rejection recovery and response headers.

use crate::{
    infrastructure::http::server::HttpServer,
    tests::{config, fixtures},
};
use serde_json::{json, Value};
use warp::http::StatusCode;
use warp::test::request;

fn server() -> HttpServer {
    config::init();
    HttpServer::new(config::test_config()).expect("test server")
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body is JSON")
}

async fn post_users(server: &HttpServer, payload: &Value) -> (StatusCode, Value) {
    let routes = server.create_routes();
    let response = request()
        .method("POST")
        .path("/users")
        .json(payload)
        .reply(&routes)
        .await;
    (response.status(), body_json(response.body()))
}

#[tokio::test]
async fn test_register_valid_user() {
    let server = server();
    let (status, body) = post_users(&server, &fixtures::valid_registration()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "johndoe123");
    assert_eq!(body["email"], "john@example.com");
    assert_eq!(body["fullName"], "John Doe");
    assert_eq!(body["validationStatus"], "passed");
    assert!(body["joinTimestamp"].as_str().is_some());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_register_without_full_name() {
    let server = server();
    let (status, body) = post_users(&server, &fixtures::minimal_registration()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["fullName"], Value::Null);
}

#[tokio::test]
async fn test_register_accepts_snake_case_full_name() {
    let server = server();
    let payload = json!({
        "username": "maryjane",
        "email": "mary@example.com",
        "password": "Secur3!Pass",
        "full_name": "Mary-Jane O'Neil"
    });
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["fullName"], "Mary-Jane O'Neil");
}

#[tokio::test]
async fn test_short_password_rejected() {
    let server = server();
    let payload = fixtures::registration_with("password", json!("123"));
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "password");
    assert_eq!(errors[0]["type"], "policy_violation");
    assert_eq!(errors[0]["message"], "Password must be at least 8 characters long");
}

#[tokio::test]
async fn test_username_with_symbols_rejected() {
    let server = server();
    let payload = fixtures::registration_with("username", json!("john_doe!"));
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "username");
    assert!(errors[0]["message"]
        .as_str()
        .unwrap()
        .starts_with("Username must be alphanumeric"));
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let server = server();
    let payload = fixtures::registration_with("email", json!("not-an-email"));
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors[0]["field"], "email");
    assert_eq!(errors[0]["type"], "email_syntax_error");
    assert_eq!(errors[0]["rejectedValue"], "not-an-email");
}

#[tokio::test]
async fn test_every_failing_field_is_reported() {
    let server = server();
    let payload = json!({
        "username": "a",
        "email": "nope",
        "password": "password",
        "fullName": "J0hn"
    });
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["username", "email", "password", "fullName"]);
}

#[tokio::test]
async fn test_missing_and_wrong_type_fields() {
    let server = server();
    let payload = json!({
        "username": 42,
        "email": "john@example.com"
    });
    let (status, body) = post_users(&server, &payload).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "username");
    assert_eq!(errors[0]["reason"], "wrong_type");
    assert_eq!(errors[1]["field"], "password");
    assert_eq!(errors[1]["reason"], "missing");
    assert_eq!(errors[1]["message"], "Field required");
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let server = server();
    let (status, body) = post_users(&server, &json!(["johndoe123"])).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errors"][0]["field"], "body");
    assert_eq!(body["errors"][0]["type"], "structural_error");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let server = server();
    let routes = server.create_routes();
    let response = request()
        .method("POST")
        .path("/users")
        .header("content-type", "application/json")
        .body("{\"username\": ")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response.body());
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let mut config = config::test_config();
    config.server.max_request_size = 1024;
    let server = HttpServer::new(config).unwrap();
    let routes = server.create_routes();

    let payload = fixtures::registration_with("fullName", json!("a".repeat(4096)));
    let response = request()
        .method("POST")
        .path("/users")
        .json(&payload)
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_validation_rules_endpoint() {
    let server = server();
    let routes = server.create_routes();
    let response = request()
        .method("GET")
        .path("/validation-rules")
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body["password_rules"]["min_length"], 8);
    assert_eq!(body["password_rules"]["requires_special_char"], true);
    assert_eq!(body["username_rules"]["min_length"], 3);
    assert_eq!(body["username_rules"]["max_length"], 20);
    assert_eq!(body["username_rules"]["alphanumeric_only"], true);
    assert_eq!(body["full_name_rules"]["max_length"], 50);
}

#[tokio::test]
async fn test_health_reports_registered_users() {
    let server = server();
    let (status, _) = post_users(&server, &fixtures::valid_registration()).await;
    assert_eq!(status, StatusCode::CREATED);

    let routes = server.create_routes();
    let response = request().method("GET").path("/health").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["registered_users"], 1);
    assert_eq!(body["details"]["metrics"]["registrations_accepted"], 1);
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let server = server();
    let routes = server.create_routes();
    let response = request().method("GET").path("/").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response.body());
    assert_eq!(body["endpoints"]["create_user"], "POST /users");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = server();
    let routes = server.create_routes();
    let response = request().method("GET").path("/nope").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response.body());
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let server = server();
    let routes = server.create_routes();
    let response = request().method("GET").path("/users").reply(&routes).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
