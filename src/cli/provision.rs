// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Provision command: create every configured component on the cluster.

use super::{EXIT_CLIENT_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::ProvisionConfig;
use crate::k8s::KubeClient;
use crate::provisioner::{ProvisionReport, Provisioner};

/// Run the provision command against the ambient cluster.
///
/// A client construction failure aborts before any request is sent.
pub async fn run_provision(config: &ProvisionConfig) -> i32 {
    let client = match KubeClient::try_default().await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to configure cluster client");
            eprintln!("Error configuring cluster client: {}", e);
            return EXIT_CLIENT_ERROR;
        }
    };

    tracing::info!(
        namespace = %config.namespace,
        components = config.components.len(),
        "Provisioning components"
    );

    let provisioner = Provisioner::new(&client, config.namespace.clone());
    let report = provisioner
        .run(&config.components, &mut std::io::stdout())
        .await;
    exit_code(&report)
}

/// Map a finished run to the process exit code.
pub fn exit_code(report: &ProvisionReport) -> i32 {
    if report.all_created() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
