// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Validation functions for component descriptor fields.
//!
//! Rejects names the API server would refuse and image references carrying
//! shell metacharacters.

use thiserror::Error;

/// Maximum allowed length for an image reference.
pub const MAX_IMAGE_LENGTH: usize = 256;

/// Maximum length of an RFC 1123 label (resource and namespace names).
pub const MAX_LABEL_LENGTH: usize = 63;

/// Suffix appended to a component name to form its Service name.
pub const SERVICE_SUFFIX: &str = "-service";

/// Longest component name whose Service name still fits in a label.
///
/// Longer names are not rejected here; the Service create fails at the API
/// server and is reported like any other create error.
pub const MAX_SERVICE_SAFE_NAME_LENGTH: usize = MAX_LABEL_LENGTH - SERVICE_SUFFIX.len();

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is empty but required.
    #[error("Field '{0}' cannot be empty")]
    EmptyField(String),
    /// Field exceeds maximum length.
    #[error("Field '{field}' exceeds maximum length of {max}")]
    MaxLengthExceeded { field: String, max: usize },
    /// Name is not a valid RFC 1123 label.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
    /// Image reference is invalid.
    #[error("Invalid image reference: {0}")]
    InvalidImage(String),
    /// Port is outside 1..=65535.
    #[error("Field '{field}' must be a port between 1 and 65535, got {port}")]
    InvalidPort { field: String, port: u16 },
}

fn validate_label(value: &str, field: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field.to_string()));
    }

    if value.len() > max {
        return Err(ValidationError::MaxLengthExceeded {
            field: field.to_string(),
            max,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidName {
        name: value.to_string(),
        reason: reason.to_string(),
    };

    let valid_chars = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
    if !value.chars().all(valid_chars) {
        return Err(invalid(
            "must contain only lowercase alphanumeric characters and dashes",
        ));
    }

    if value.starts_with('-') || value.ends_with('-') {
        return Err(invalid("must start and end with an alphanumeric character"));
    }

    Ok(())
}

/// Validate a component name.
///
/// The name is used verbatim for the Deployment, the container, and the
/// `app` label. The `<name>-service` bound is left to the API server.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    validate_label(name, "name", MAX_LABEL_LENGTH)
}

/// Validate a namespace name.
pub fn validate_namespace(namespace: &str) -> Result<(), ValidationError> {
    validate_label(namespace, "namespace", MAX_LABEL_LENGTH)
}

/// Validate a container image reference.
///
/// Rejects whitespace, shell metacharacters and invalid name formats.
pub fn validate_image(image: &str) -> Result<(), ValidationError> {
    if image.is_empty() {
        return Err(ValidationError::EmptyField("image".to_string()));
    }

    if image.len() > MAX_IMAGE_LENGTH {
        return Err(ValidationError::MaxLengthExceeded {
            field: "image".to_string(),
            max: MAX_IMAGE_LENGTH,
        });
    }

    let forbidden_chars = [
        ';', '&', '|', '`', '$', '(', ')', '{', '}', '<', '>', '\'', '"', '\\',
    ];
    for ch in image.chars() {
        if ch.is_whitespace() || ch.is_control() || forbidden_chars.contains(&ch) {
            return Err(ValidationError::InvalidImage(format!(
                "contains forbidden character: {:?}",
                ch
            )));
        }
    }

    for segment in image.split('/') {
        if segment.is_empty() {
            return Err(ValidationError::InvalidImage(
                "contains an empty path segment".to_string(),
            ));
        }
        if segment.starts_with('-') || segment.starts_with('.') {
            return Err(ValidationError::InvalidImage(
                "name cannot start with dash or dot".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate a port number.
pub fn validate_port(port: u16, field: &str) -> Result<(), ValidationError> {
    if port == 0 {
        return Err(ValidationError::InvalidPort {
            field: field.to_string(),
            port,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
