//! Configuration management for the guard service
//!
//! This module handles loading, validation, and environment overrides.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GuardError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding the server host
pub const ENV_HOST: &str = "ROLE_GUARD_HOST";
/// Environment variable overriding the server port
pub const ENV_PORT: &str = "ROLE_GUARD_PORT";
/// Environment variable overriding the worker count
pub const ENV_WORKERS: &str = "ROLE_GUARD_WORKERS";
/// Environment variable overriding the actor header
pub const ENV_ACTOR_HEADER: &str = "ROLE_GUARD_ACTOR_HEADER";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Route guard configuration
    #[serde(default)]
    pub guard: GuardConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GuardError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = serde_yaml::from_str(&content)?;
        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text without consulting the environment
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration with environment overrides applied
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ROLE_GUARD_*` environment variables on top of this configuration
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub(crate) fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|e| GuardError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup(ENV_WORKERS) {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| GuardError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        if let Some(header) = lookup(ENV_ACTOR_HEADER) {
            self.guard.actor_header = header;
        }
        Ok(())
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate().map_err(GuardError::Config)?;
        self.guard.validate().map_err(GuardError::Config)?;
        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get guard configuration
    pub fn guard(&self) -> &GuardConfig {
        &self.guard
    }
}
