//! Service index handler

use crate::infrastructure::http::responses::ResponseFormatter;
use serde_json::json;
use warp::reply::Response;

/// Handle `GET /`
pub async fn handle_root_request() -> Result<Response, warp::reject::Rejection> {
    let body = json!({
        "message": "Registration validation service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "create_user": "POST /users",
            "validation_rules": "GET /validation-rules",
            "health": "GET /health"
        }
    });

    Ok(ResponseFormatter::json(&body, warp::http::StatusCode::OK))
}
