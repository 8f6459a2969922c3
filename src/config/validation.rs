//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{HashingConfig, LoggingConfig};
use crate::config::AppConfig;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["json", "text"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)?;
        Self::validate_hashing_config(&config.hashing)?;

        if !config.security.enable_security_headers {
            tracing::warn!("Security headers are disabled - responses will not carry hardening headers");
        }

        Ok(())
    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        let level = logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        let format = logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(AppError::Validation(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }

    /// Validate Argon2 parameters
    fn validate_hashing_config(hashing: &HashingConfig) -> crate::Result<()> {
        // Argon2 requires at least 8 KiB of memory per lane
        if hashing.memory_kib < 8 * hashing.parallelism {
            return Err(AppError::Validation(format!(
                "Hashing memory_kib ({}) must be at least 8 x parallelism ({})",
                hashing.memory_kib, hashing.parallelism
            )));
        }

        Ok(())
    }
}
