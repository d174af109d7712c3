// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tests for client error mapping.

use super::*;

fn api_error(reason: &str, code: u16, message: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: message.to_string(),
        reason: reason.to_string(),
        code,
    })
}

#[test]
fn test_already_exists_maps_to_rejected() {
    let err = ClientError::from(api_error(
        "AlreadyExists",
        409,
        "deployments.apps \"frontend\" already exists",
    ));

    assert!(err.is_already_exists());
    assert_eq!(err.to_string(), "deployments.apps \"frontend\" already exists");
}

#[test]
fn test_forbidden_is_not_already_exists() {
    let err = ClientError::from(api_error(
        "Forbidden",
        403,
        "services is forbidden: User \"dev\" cannot create resource \"services\"",
    ));

    assert!(!err.is_already_exists());
    assert!(matches!(err, ClientError::Rejected { code: 403, .. }));
    assert!(err.to_string().starts_with("services is forbidden"));
}

#[test]
fn test_conflict_code_counts_as_already_exists() {
    let err = ClientError::Rejected {
        reason: String::new(),
        code: 409,
        message: "conflict".to_string(),
    };
    assert!(err.is_already_exists());
}

#[test]
fn test_non_api_error_is_transport() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    let err = ClientError::from(kube::Error::Service(Box::new(io)));
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(!err.is_already_exists());
    assert!(err.to_string().contains("connection refused"));
}
