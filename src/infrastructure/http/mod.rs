//! HTTP infrastructure module
//!
//! This module contains HTTP-related concerns including models,
//! server implementation, routes, utilities, responses and handlers.

pub mod models;
pub mod server;
pub mod utils;
pub mod responses;
pub mod handlers;
pub mod routes;

pub use models::{ErrorBody, RequestContext, ValidationErrorBody};
pub use server::HttpServer;
pub use responses::ResponseFormatter;
