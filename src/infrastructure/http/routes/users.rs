//! User registration routes

use crate::{
    application::use_cases::RegisterUserUseCase,
    config::AppConfig,
    infrastructure::http::{
        handlers::handle_register_request,
        utils::{with_config, with_register_use_case},
    },
};
use std::sync::Arc;
use warp::Filter;

/// User routes configuration
pub struct UserRoutes;

impl UserRoutes {
    /// Create the `POST /users` route
    pub fn create_register_route(
        config: AppConfig,
        register_use_case: Arc<RegisterUserUseCase>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path("users")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json::<serde_json::Value>())
            .and(warp::header::optional::<String>("x-forwarded-for"))
            .and(warp::header::optional::<String>("user-agent"))
            .and(with_register_use_case(register_use_case))
            .and(with_config(config))
            .and_then(handle_register_request)
    }
}
