// Copyright 2026 stackup Contributors
// SPDX-License-Identifier: Apache-2.0

//! Provisioning configuration.
//!
//! Every field is optional. With no file and no environment overrides the
//! result is the built-in component table in namespace `default`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::k8s::types::{default_components, validate_components, ComponentSpec};
use crate::k8s::validation::{validate_namespace, ValidationError};
use crate::logging::LoggingConfig;

/// Env var naming a TOML config file.
pub const ENV_CONFIG_PATH: &str = "STACKUP_CONFIG";

/// Env var overriding the target namespace.
pub const ENV_NAMESPACE: &str = "STACKUP_NAMESPACE";

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

/// Settings for a provisioning run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProvisionConfig {
    /// Namespace every resource is created in.
    pub namespace: String,
    /// Components to provision, in order.
    pub components: Vec<ComponentSpec>,
    pub logging: LoggingConfig,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            components: default_components(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ProvisionConfig {
    /// Load configuration from the process environment.
    ///
    /// See [`ProvisionConfig::load_with`] for precedence.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the file cannot be read or parsed, or if
    /// any field fails validation.
    pub fn load(path: Option<&Path>, namespace: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with(path, namespace, |key| std::env::var(key).ok())
    }

    /// Load configuration, resolving environment variables through `env`.
    ///
    /// The file is `path`, else `STACKUP_CONFIG`, else the built-in defaults.
    /// The namespace is `namespace`, else `STACKUP_NAMESPACE`, else the
    /// file's value. Validation runs once, after every override is applied.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the file cannot be read or parsed, or if
    /// any field fails validation.
    pub fn load_with<F>(
        path: Option<&Path>,
        namespace: Option<&str>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_path = env(ENV_CONFIG_PATH)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let mut config = match path.or(env_path.as_deref()) {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };

        let env_namespace = env(ENV_NAMESPACE).filter(|ns| !ns.is_empty());
        if let Some(ns) = namespace.map(str::to_string).or(env_namespace) {
            config.namespace = ns;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file without applying env overrides or validating.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Validate the namespace and every component.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_namespace(&self.namespace)?;
        validate_components(&self.components)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
