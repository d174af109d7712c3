// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Component descriptors.
//!
//! A [`ComponentSpec`] is the only input the provisioner needs per
//! application component. The Deployment and Service are both derived from it.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

pub use super::validation::{
    validate_image, validate_name, validate_port, ValidationError, MAX_SERVICE_SAFE_NAME_LENGTH,
    SERVICE_SUFFIX,
};

/// Label key used for pod labels and both selectors.
pub const APP_LABEL: &str = "app";

/// Immutable description of one application component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component name; also the Deployment, container and `app` label value.
    pub name: String,
    /// Container image reference.
    pub image: String,
    /// Port exposed by the container and by the Service.
    pub service_port: u16,
    /// Port the Service forwards to on the selected pods.
    pub target_port: u16,
}

impl ComponentSpec {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        service_port: u16,
        target_port: u16,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            service_port,
            target_port,
        }
    }

    /// Labels carried by the workload's pods.
    ///
    /// Used for the pod template, the Deployment selector and the Service
    /// selector alike, so the Service always routes to this workload.
    pub fn app_labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(APP_LABEL.to_string(), self.name.clone())])
    }

    /// Name of the Service exposing this component.
    pub fn service_name(&self) -> String {
        format!("{}{}", self.name, SERVICE_SUFFIX)
    }

    /// Validate all fields of the component
    ///
    /// # Errors
    /// Returns a `ValidationError` if any field fails validation
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_image(&self.image)?;
        validate_port(self.service_port, "service_port")?;
        validate_port(self.target_port, "target_port")?;
        Ok(())
    }
}

/// Validate every spec in a list.
///
/// Duplicate names and names too long for their Service are accepted: the
/// API server rejects those creates and the provisioner reports them per
/// resource without stopping the run.
///
/// # Errors
/// Returns the first `ValidationError` encountered, in list order.
pub fn validate_components(components: &[ComponentSpec]) -> Result<(), ValidationError> {
    for component in components {
        component.validate()?;
    }
    Ok(())
}

/// Names that appear more than once, in first-repeat order.
pub fn duplicate_names(components: &[ComponentSpec]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(components.len());
    let mut duplicates = Vec::new();
    for component in components {
        if !seen.insert(component.name.as_str()) && !duplicates.contains(&component.name) {
            duplicates.push(component.name.clone());
        }
    }
    duplicates
}

/// The built-in component table, in provisioning order.
pub fn default_components() -> Vec<ComponentSpec> {
    vec![
        ComponentSpec::new("frontend", "your-dockerhub-username/frontend:latest", 80, 80),
        ComponentSpec::new("backend", "your-dockerhub-username/backend:latest", 8080, 8080),
        ComponentSpec::new("ml-model", "your-dockerhub-username/ml-model:latest", 8000, 8000),
    ]
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
