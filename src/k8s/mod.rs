// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes integration.
//!
//! Component descriptors, the manifests derived from them, and the client
//! capability used to submit those manifests.

pub mod client;
pub mod resources;
pub mod types;
pub mod validation;

pub use client::{ClientError, KubeClient, OrchestrationClient};
pub use resources::{build_exposure, build_workload};
pub use types::{default_components, validate_components, ComponentSpec};
pub use validation::ValidationError;
