//! Pure per-field validators for request payloads.
//!
//! Each validator checks a single rule and reports the first violation via
//! [`FieldError`]; request-level `validate` methods chain them with `?`, so
//! validation fails fast at the first violating field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The value must contain at least one non-whitespace character.
pub fn not_empty(value: &str, field: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::new(field, format!("{field} cannot be empty")));
    }
    Ok(())
}

/// The value must not exceed `max` characters.
pub fn max_length(value: &str, max: usize, field: &str) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::new(
            field,
            format!("{field} cannot exceed {max} characters"),
        ));
    }
    Ok(())
}

/// The value must be at least `min`.
pub fn min_value(value: f64, min: f64, field: &str) -> Result<(), FieldError> {
    if value < min {
        return Err(FieldError::new(
            field,
            format!("{field} must be at least {min}"),
        ));
    }
    Ok(())
}

/// The value must be greater than zero.
pub fn positive(value: i64, field: &str) -> Result<(), FieldError> {
    if value <= 0 {
        return Err(FieldError::new(
            field,
            format!("{field} must be greater than zero"),
        ));
    }
    Ok(())
}
