// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cluster API capability used by the provisioner.
//!
//! [`OrchestrationClient`] is the seam between the provisioning loop and the
//! cluster. [`KubeClient`] is the production implementation; tests substitute
//! an in-memory fake.

use async_trait::async_trait;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::api::{Api, PostParams};
use kube::core::ErrorResponse;
use kube::Client;
use thiserror::Error;

/// API status reason returned when a resource name is taken.
pub const REASON_ALREADY_EXISTS: &str = "AlreadyExists";

/// HTTP status code for a conflicting create.
pub const CODE_CONFLICT: u16 = 409;

/// Error returned by a single create request.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API server answered with a failure status.
    #[error("{message}")]
    Rejected {
        reason: String,
        code: u16,
        message: String,
    },
    /// The request never produced an API status (connection, TLS, decoding).
    #[error(transparent)]
    Transport(kube::Error),
}

impl ClientError {
    /// Whether the failure means the resource already exists.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Self::Rejected { reason, code, .. } => {
                reason == REASON_ALREADY_EXISTS || *code == CODE_CONFLICT
            }
            Self::Transport(_) => false,
        }
    }
}

impl From<kube::Error> for ClientError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(ErrorResponse {
                reason,
                code,
                message,
                ..
            }) => Self::Rejected {
                reason,
                code,
                message,
            },
            other => Self::Transport(other),
        }
    }
}

/// Create-only access to the cluster's workload and exposure resources.
///
/// Requests are issued one at a time by the provisioner; implementations need
/// not support overlapping calls.
#[async_trait]
pub trait OrchestrationClient: Send + Sync {
    /// Submit a create request for a Deployment in `namespace`.
    async fn create_workload(
        &self,
        namespace: &str,
        workload: &Deployment,
    ) -> Result<Deployment, ClientError>;

    /// Submit a create request for a Service in `namespace`.
    async fn create_exposure(
        &self,
        namespace: &str,
        exposure: &Service,
    ) -> Result<Service, ClientError>;
}

/// [`OrchestrationClient`] backed by a live API server.
#[derive(Clone)]
pub struct KubeClient {
    client: Client,
}

impl KubeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from the ambient configuration.
    ///
    /// Resolution order is kube's: in-cluster service account, then
    /// `KUBECONFIG`, then `~/.kube/config`.
    ///
    /// # Errors
    /// Returns the underlying `kube::Error` when no usable configuration is found.
    pub async fn try_default() -> Result<Self, kube::Error> {
        let client = Client::try_default().await?;
        tracing::debug!(
            default_namespace = client.default_namespace(),
            "Cluster client configured"
        );
        Ok(Self::new(client))
    }
}

#[async_trait]
impl OrchestrationClient for KubeClient {
    async fn create_workload(
        &self,
        namespace: &str,
        workload: &Deployment,
    ) -> Result<Deployment, ClientError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&PostParams::default(), workload).await?)
    }

    async fn create_exposure(
        &self,
        namespace: &str,
        exposure: &Service,
    ) -> Result<Service, ClientError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), namespace);
        Ok(api.create(&PostParams::default(), exposure).await?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
