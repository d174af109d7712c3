// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for component field validation.

use super::*;

#[test]
fn test_valid_names() {
    assert!(validate_name("frontend").is_ok());
    assert!(validate_name("ml-model").is_ok());
    assert!(validate_name("a1").is_ok());
    assert!(validate_name(&"x".repeat(MAX_LABEL_LENGTH)).is_ok());
}

#[test]
fn test_empty_name_rejected() {
    assert_eq!(
        validate_name(""),
        Err(ValidationError::EmptyField("name".to_string()))
    );
}

#[test]
fn test_name_bounded_by_label_length() {
    // 56 chars overflows "<name>-service" but is still a legal Deployment name.
    assert!(validate_name(&"x".repeat(MAX_SERVICE_SAFE_NAME_LENGTH + 1)).is_ok());
    assert!(matches!(
        validate_name(&"x".repeat(MAX_LABEL_LENGTH + 1)),
        Err(ValidationError::MaxLengthExceeded { max: 63, .. })
    ));
}

#[test]
fn test_uppercase_name_rejected() {
    assert!(matches!(
        validate_name("Frontend"),
        Err(ValidationError::InvalidName { .. })
    ));
}

#[test]
fn test_name_with_underscore_or_dot_rejected() {
    assert!(validate_name("ml_model").is_err());
    assert!(validate_name("ml.model").is_err());
}

#[test]
fn test_name_dash_boundaries_rejected() {
    assert!(validate_name("-frontend").is_err());
    assert!(validate_name("frontend-").is_err());
}

#[test]
fn test_namespace_allows_full_label_length() {
    assert!(validate_namespace("default").is_ok());
    assert!(validate_namespace(&"n".repeat(MAX_LABEL_LENGTH)).is_ok());
    assert!(validate_namespace(&"n".repeat(MAX_LABEL_LENGTH + 1)).is_err());
    assert!(validate_namespace("Kube_System").is_err());
}

#[test]
fn test_valid_images() {
    assert!(validate_image("repo/frontend:latest").is_ok());
    assert!(validate_image("nginx").is_ok());
    assert!(validate_image("registry.example.com:5000/team/app:1.2.3").is_ok());
    assert!(validate_image("ghcr.io/org/app@sha256:abcdef0123456789").is_ok());
}

#[test]
fn test_image_shell_injection_rejected() {
    for image in ["repo/app; rm -rf /", "repo/app$(id)", "repo/app`id`", "repo/app|cat"] {
        assert!(
            matches!(validate_image(image), Err(ValidationError::InvalidImage(_))),
            "{} should be rejected",
            image
        );
    }
}

#[test]
fn test_image_whitespace_rejected() {
    assert!(validate_image("repo/app :latest").is_err());
    assert!(validate_image("repo/app\n").is_err());
}

#[test]
fn test_image_segment_rules() {
    assert!(validate_image("-repo/app").is_err());
    assert!(validate_image("repo/.app").is_err());
    assert!(validate_image("repo//app").is_err());
}

#[test]
fn test_image_length_limit() {
    let image = "a".repeat(MAX_IMAGE_LENGTH + 1);
    assert!(matches!(
        validate_image(&image),
        Err(ValidationError::MaxLengthExceeded { .. })
    ));
    assert_eq!(
        validate_image(""),
        Err(ValidationError::EmptyField("image".to_string()))
    );
}

#[test]
fn test_port_zero_rejected() {
    assert!(validate_port(80, "service_port").is_ok());
    assert!(validate_port(u16::MAX, "service_port").is_ok());
    let err = validate_port(0, "target_port").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Field 'target_port' must be a port between 1 and 65535, got 0"
    );
}

#[test]
fn test_error_display() {
    let err = ValidationError::EmptyField("image".to_string());
    assert_eq!(err.to_string(), "Field 'image' cannot be empty");
}
