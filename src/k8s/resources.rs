// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Desired-state manifests derived from a [`ComponentSpec`].

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use super::types::ComponentSpec;

/// Replica count requested for every workload.
pub const WORKLOAD_REPLICAS: i32 = 1;

/// Build the Deployment for a component.
///
/// One replica, one container named after the component, pods labeled and
/// selected by `app=<name>`.
pub fn build_workload(spec: &ComponentSpec) -> Deployment {
    let labels = spec.app_labels();

    Deployment {
        metadata: ObjectMeta {
            name: Some(spec.name.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(WORKLOAD_REPLICAS),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: spec.name.clone(),
                        image: Some(spec.image.clone()),
                        ports: Some(vec![ContainerPort {
                            container_port: i32::from(spec.service_port),
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the Service exposing a component.
///
/// Named `<name>-service`, selects `app=<name>` and forwards
/// `service_port` to `target_port`.
pub fn build_exposure(spec: &ComponentSpec) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(spec.service_name()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(spec.app_labels()),
            ports: Some(vec![ServicePort {
                port: i32::from(spec.service_port),
                target_port: Some(IntOrString::Int(i32::from(spec.target_port))),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
