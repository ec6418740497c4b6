//! Configuration validation.
//!
//! # Responsibilities
//! - Type checks for recognized keys (serde accepts any JSON value)
//! - Type checks for the viewer options the page template reads directly
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DocsOptions → Result<(), Vec<ValidationError>>
//! - Unknown keys are never rejected
//! - Path-valued keys are not shape-checked: a route prefix that no request
//!   can equal simply never matches, and a favicon override is any href

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::{
    DocsOptions, FAVICON_16, FAVICON_32, HIDE_TOPBAR, OAUTH_OPTIONS, ROUTE_PREFIX,
    SWAGGER_OPTIONS, SWAGGER_VERSION, TITLE,
};

/// Reported key for `swaggerOptions.dom_id`.
pub const SWAGGER_DOM_ID: &str = "swaggerOptions.dom_id";

/// A single semantic problem with a set of options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A recognized key holds a value of the wrong type.
    #[error("`{key}` must be {expected}")]
    WrongType { key: &'static str, expected: &'static str },
}

/// Validate the recognized keys of `options`. Missing keys are fine.
pub fn validate_options(options: &DocsOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if matches!(options.get(ROUTE_PREFIX), Some(value) if !(value.is_string() || *value == Value::Bool(false))) {
        errors.push(ValidationError::WrongType {
            key: ROUTE_PREFIX,
            expected: "a path string or false",
        });
    }

    for key in [TITLE, SWAGGER_VERSION, FAVICON_16, FAVICON_32] {
        if matches!(options.get(key), Some(value) if !value.is_string()) {
            errors.push(ValidationError::WrongType { key, expected: "a string" });
        }
    }

    if matches!(options.get(HIDE_TOPBAR), Some(value) if !value.is_boolean()) {
        errors.push(ValidationError::WrongType {
            key: HIDE_TOPBAR,
            expected: "a boolean",
        });
    }

    if matches!(options.get(OAUTH_OPTIONS), Some(value) if !(value.is_boolean() || value.is_object())) {
        errors.push(ValidationError::WrongType {
            key: OAUTH_OPTIONS,
            expected: "a boolean or a table",
        });
    }

    match options.get(SWAGGER_OPTIONS) {
        None => {}
        Some(Value::Object(viewer)) => {
            // The page derives the container element id from it.
            if matches!(viewer.get("dom_id"), Some(value) if !value.is_string()) {
                errors.push(ValidationError::WrongType {
                    key: SWAGGER_DOM_ID,
                    expected: "a string",
                });
            }
        }
        Some(_) => errors.push(ValidationError::WrongType {
            key: SWAGGER_OPTIONS,
            expected: "a table",
        }),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
