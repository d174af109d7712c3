// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for component descriptors.

use super::*;

#[test]
fn test_app_labels_single_entry() {
    let spec = ComponentSpec::new("frontend", "repo/frontend:latest", 80, 80);
    let labels = spec.app_labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels.get("app").map(String::as_str), Some("frontend"));
}

#[test]
fn test_service_name_suffix() {
    let spec = ComponentSpec::new("ml-model", "repo/ml-model:latest", 8000, 8000);
    assert_eq!(spec.service_name(), "ml-model-service");
}

#[test]
fn test_default_components_order_and_ports() {
    let components = default_components();
    let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["frontend", "backend", "ml-model"]);

    assert_eq!(components[0].service_port, 80);
    assert_eq!(components[1].service_port, 8080);
    assert_eq!(components[1].target_port, 8080);
    assert_eq!(components[2].image, "your-dockerhub-username/ml-model:latest");
}

#[test]
fn test_default_components_are_valid() {
    assert!(validate_components(&default_components()).is_ok());
}

#[test]
fn test_validate_rejects_bad_fields() {
    let bad_name = ComponentSpec::new("Front End", "repo/app:1", 80, 80);
    assert!(matches!(
        bad_name.validate(),
        Err(ValidationError::InvalidName { .. })
    ));

    let bad_image = ComponentSpec::new("frontend", "repo/app;reboot", 80, 80);
    assert!(matches!(
        bad_image.validate(),
        Err(ValidationError::InvalidImage(_))
    ));

    let bad_port = ComponentSpec::new("frontend", "repo/app:1", 80, 0);
    assert!(matches!(
        bad_port.validate(),
        Err(ValidationError::InvalidPort { .. })
    ));
}

#[test]
fn test_duplicate_names_pass_validation() {
    let components = vec![
        ComponentSpec::new("api", "repo/api:1", 80, 8080),
        ComponentSpec::new("web", "repo/web:1", 80, 80),
        ComponentSpec::new("api", "repo/api:2", 81, 8081),
        ComponentSpec::new("api", "repo/api:3", 82, 8082),
    ];
    assert!(validate_components(&components).is_ok());
    assert_eq!(duplicate_names(&components), vec!["api".to_string()]);
}

#[test]
fn test_long_name_passes_validation() {
    let name = "x".repeat(MAX_SERVICE_SAFE_NAME_LENGTH + 1);
    let components = vec![ComponentSpec::new(name, "repo/app:1", 80, 80)];
    assert!(validate_components(&components).is_ok());
}

#[test]
fn test_empty_component_list_is_valid() {
    assert!(validate_components(&[]).is_ok());
}

#[test]
fn test_deserialize_from_toml() {
    let spec: ComponentSpec = toml::from_str(
        r#"
        name = "backend"
        image = "repo/backend:latest"
        service_port = 8080
        target_port = 9090
        "#,
    )
    .unwrap();

    assert_eq!(spec, ComponentSpec::new("backend", "repo/backend:latest", 8080, 9090));
}

#[test]
fn test_out_of_range_port_fails_to_deserialize() {
    let result: Result<ComponentSpec, _> = toml::from_str(
        r#"
        name = "backend"
        image = "repo/backend:latest"
        service_port = 70000
        target_port = 80
        "#,
    );
    assert!(result.is_err());
}
