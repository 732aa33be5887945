//! Configuration validation rules.
//!
//! Decoding already enforces that `apiVersion`, `kind` and `spec` are
//! present. This module checks what serde cannot:
//! - `apiVersion` must not be blank
//! - `kind` must be `Needs`

use crate::config::schema::{NeedsConfig, NEEDS_KIND};
use crate::error::{NeedError, Result};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

/// Validate a document and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &NeedsConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.api_version.trim().is_empty() {
        errors.push(ValidationError {
            rule: "blank-api-version".to_string(),
            message: "apiVersion must not be blank".to_string(),
        });
    }

    if config.kind != NEEDS_KIND {
        errors.push(ValidationError {
            rule: "unexpected-kind".to_string(),
            message: format!("kind must be '{}', found '{}'", NEEDS_KIND, config.kind),
        });
    }

    errors
}

/// Validate a document, failing on the first batch of errors.
///
/// `name` identifies the document in the error message.
pub fn validate(config: &NeedsConfig, name: &str) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    Err(NeedError::ConfigValidationError {
        name: name.to_string(),
        message,
    })
}
