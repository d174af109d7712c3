// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! stackup - one-shot provisioning of application components onto Kubernetes.
//!
//! Each [`ComponentSpec`] becomes one Deployment and one Service. The
//! [`Provisioner`] submits both create requests per component, in order,
//! through an [`OrchestrationClient`] and reports every outcome without
//! stopping on failure. Nothing is updated, retried or deleted.

pub mod cli;
pub mod config;
pub mod k8s;
pub mod logging;
pub mod provisioner;

pub use config::{ConfigError, ProvisionConfig};
pub use k8s::{ClientError, ComponentSpec, KubeClient, OrchestrationClient};
pub use provisioner::{AttemptOutcome, AttemptResult, ProvisionReport, Provisioner, ResourceKind};
