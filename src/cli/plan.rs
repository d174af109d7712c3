// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plan command: print the manifests a run would submit, without a cluster.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use serde::Serialize;

use super::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::ProvisionConfig;
use crate::k8s::{build_exposure, build_workload};

/// Manifests for one component.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedComponent {
    pub component: String,
    pub deployment: Deployment,
    pub service: Service,
}

/// Everything a provisioning run would submit, in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub namespace: String,
    pub components: Vec<PlannedComponent>,
}

/// Build the plan for a configuration.
pub fn build_plan(config: &ProvisionConfig) -> Plan {
    Plan {
        namespace: config.namespace.clone(),
        components: config
            .components
            .iter()
            .map(|spec| PlannedComponent {
                component: spec.name.clone(),
                deployment: build_workload(spec),
                service: build_exposure(spec),
            })
            .collect(),
    }
}

/// Run the plan command and print the result as JSON.
pub fn run_plan(config: &ProvisionConfig) -> i32 {
    match serde_json::to_string_pretty(&build_plan(config)) {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error rendering plan: {}", e);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
