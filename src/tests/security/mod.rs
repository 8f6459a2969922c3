//! Security tests
//!
//! Covers response hardening headers and password storage.

use crate::{
    infrastructure::{
        adapters::{InMemoryUserStore, PasswordHasher, UserStore},
        http::server::HttpServer,
    },
    tests::{config, fixtures},
};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::test::request;

#[tokio::test]
async fn test_security_headers_on_success_and_error() {
    let server = HttpServer::new(config::test_config()).unwrap();
    let routes = server.create_routes();

    for path in ["/health", "/does-not-exist"] {
        let response = request().method("GET").path(path).reply(&routes).await;
        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
        assert_eq!(headers["referrer-policy"], "no-referrer");
        assert_eq!(headers["cache-control"], "no-store");
    }
}

#[tokio::test]
async fn test_security_headers_can_be_disabled() {
    let mut config = config::test_config();
    config.security.enable_security_headers = false;
    let server = HttpServer::new(config).unwrap();
    let routes = server.create_routes();

    let response = request().method("GET").path("/health").reply(&routes).await;
    assert!(response.headers().get("x-frame-options").is_none());
}

#[tokio::test]
async fn test_stored_password_is_hashed() {
    let config = config::test_config();
    let store = Arc::new(InMemoryUserStore::new());
    let server = HttpServer::with_store(config.clone(), store.clone()).unwrap();
    let routes = server.create_routes();

    let response = request()
        .method("POST")
        .path("/users")
        .json(&fixtures::valid_registration())
        .reply(&routes)
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = String::from_utf8_lossy(response.body()).to_string();
    assert!(!body.contains("SecurePass123!"));

    let users = store.list().await.unwrap();
    assert_eq!(users.len(), 1);
    let hasher = PasswordHasher::new(&config.hashing).unwrap();
    assert!(hasher.verify("SecurePass123!", &users[0].password_hash).unwrap());
    assert!(!hasher.verify("WrongPass123!", &users[0].password_hash).unwrap());
}

#[tokio::test]
async fn test_rejected_password_is_echoed_only_in_errors() {
    let server = HttpServer::new(config::test_config()).unwrap();
    let routes = server.create_routes();

    let response = request()
        .method("POST")
        .path("/users")
        .json(&fixtures::registration_with("password", serde_json::json!("short")))
        .reply(&routes)
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["errors"][0]["rejectedValue"], "short");
    assert!(body.get("username").is_none());
}
