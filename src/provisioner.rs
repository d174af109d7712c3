// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! One-shot provisioning loop.
//!
//! For each component, in order: create the Deployment, report, create the
//! Service, report. Every create is attempted exactly once and a failure
//! never stops the remaining attempts. There is no rollback, retry or
//! post-create verification.

use std::fmt;
use std::io::Write;

use crate::k8s::types::{duplicate_names, MAX_SERVICE_SAFE_NAME_LENGTH};
use crate::k8s::{build_exposure, build_workload, ClientError, ComponentSpec, OrchestrationClient};

/// Kind of resource a create attempt targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deployment,
    Service,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Deployment => write!(f, "Deployment"),
            ResourceKind::Service => write!(f, "Service"),
        }
    }
}

/// What the API server said about one create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Created,
    Failed {
        message: String,
        already_exists: bool,
    },
}

impl From<Result<(), ClientError>> for AttemptOutcome {
    fn from(result: Result<(), ClientError>) -> Self {
        match result {
            Ok(()) => AttemptOutcome::Created,
            Err(err) => AttemptOutcome::Failed {
                already_exists: err.is_already_exists(),
                message: err.to_string(),
            },
        }
    }
}

/// Result of a single create attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResult {
    /// Component the resource was derived from.
    pub component: String,
    pub kind: ResourceKind,
    /// Name of the resource that was submitted.
    pub resource_name: String,
    pub outcome: AttemptOutcome,
}

impl AttemptResult {
    pub fn is_created(&self) -> bool {
        self.outcome == AttemptOutcome::Created
    }
}

/// Renders the console line for this attempt.
///
/// Success names the resource; failure names the component.
impl fmt::Display for AttemptResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            AttemptOutcome::Created => write!(f, "{} created: {}", self.kind, self.resource_name),
            AttemptOutcome::Failed { message, .. } => {
                write!(f, "{} {}: {}", self.kind, self.component, message)
            }
        }
    }
}

/// All attempts of one run, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub attempts: Vec<AttemptResult>,
}

impl ProvisionReport {
    pub fn created(&self) -> usize {
        self.attempts.iter().filter(|a| a.is_created()).count()
    }

    pub fn failed(&self) -> usize {
        self.attempts.len() - self.created()
    }

    pub fn all_created(&self) -> bool {
        self.attempts.iter().all(AttemptResult::is_created)
    }
}

/// Submits the Deployment and Service for each component to one namespace.
pub struct Provisioner<'a, C: OrchestrationClient + ?Sized> {
    client: &'a C,
    namespace: String,
}

impl<'a, C: OrchestrationClient + ?Sized> Provisioner<'a, C> {
    pub fn new(client: &'a C, namespace: impl Into<String>) -> Self {
        Self {
            client,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Provision every component in order, writing one line per attempt to `out`.
    ///
    /// Never fails: create errors are recorded in the report and a write
    /// error on `out` is logged.
    pub async fn run(&self, components: &[ComponentSpec], out: &mut dyn Write) -> ProvisionReport {
        warn_expected_rejections(components);

        let mut report = ProvisionReport {
            attempts: Vec::with_capacity(components.len() * 2),
        };

        for component in components {
            let workload = build_workload(component);
            let result = self
                .client
                .create_workload(&self.namespace, &workload)
                .await
                .map(|_| ());
            report.attempts.push(self.record(
                component,
                ResourceKind::Deployment,
                component.name.clone(),
                result,
                out,
            ));

            let exposure = build_exposure(component);
            let result = self
                .client
                .create_exposure(&self.namespace, &exposure)
                .await
                .map(|_| ());
            report.attempts.push(self.record(
                component,
                ResourceKind::Service,
                component.service_name(),
                result,
                out,
            ));
        }

        tracing::info!(
            namespace = %self.namespace,
            created = report.created(),
            failed = report.failed(),
            "Provisioning finished"
        );
        report
    }

    fn record(
        &self,
        component: &ComponentSpec,
        kind: ResourceKind,
        resource_name: String,
        result: Result<(), ClientError>,
        out: &mut dyn Write,
    ) -> AttemptResult {
        let attempt = AttemptResult {
            component: component.name.clone(),
            kind,
            resource_name,
            outcome: AttemptOutcome::from(result),
        };

        match &attempt.outcome {
            AttemptOutcome::Created => tracing::info!(
                namespace = %self.namespace,
                kind = %attempt.kind,
                name = %attempt.resource_name,
                "Resource created"
            ),
            AttemptOutcome::Failed {
                message,
                already_exists,
            } => tracing::warn!(
                namespace = %self.namespace,
                kind = %attempt.kind,
                name = %attempt.resource_name,
                already_exists,
                error = %message,
                "Resource create failed"
            ),
        }

        if let Err(e) = writeln!(out, "{}", attempt) {
            tracing::warn!(error = %e, "Failed to write attempt result");
        }

        attempt
    }
}

/// Log the creates the API server is certain to refuse. They are still sent.
fn warn_expected_rejections(components: &[ComponentSpec]) {
    for name in duplicate_names(components) {
        tracing::warn!(name = %name, "Duplicate component name, repeated creates will fail");
    }
    for component in components {
        if component.name.len() > MAX_SERVICE_SAFE_NAME_LENGTH {
            tracing::warn!(
                name = %component.name,
                service = %component.service_name(),
                "Service name exceeds label length, its create will fail"
            );
        }
    }
}

#[cfg(test)]
#[path = "provisioner_tests.rs"]
mod tests;
