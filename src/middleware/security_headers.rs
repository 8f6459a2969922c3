//! Response hardening headers

use crate::config::AppConfig;
use warp::http::{header, HeaderMap, HeaderValue};

/// Security headers applied to every response when enabled
#[derive(Debug, Clone)]
pub struct SecurityHeadersMiddleware {
    enabled: bool,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            enabled: config.security.enable_security_headers,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Headers to attach; empty when disabled
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if !self.enabled {
            return headers;
        }

        headers.insert(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
        headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
        headers.insert(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer"));
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        headers
    }
}
