//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::settings::validate_prefix;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("commands.prefix {0:?} is not usable: {1}")]
    InvalidPrefix(char, &'static str),
    #[error("chat.badge must not be empty")]
    EmptyBadge,
    #[error("logging.level must not be empty")]
    EmptyLogLevel,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(reason) = validate_prefix(config.commands.prefix) {
        errors.push(ValidationError::InvalidPrefix(
            config.commands.prefix,
            reason,
        ));
    }
    if config.chat.badge.trim().is_empty() {
        errors.push(ValidationError::EmptyBadge);
    }
    if config.logging.level.trim().is_empty() {
        errors.push(ValidationError::EmptyLogLevel);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
