//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GuardError, Result};
use tracing::{info, warn};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/guard.yaml";

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GuardError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

/// Run the server, loading `path` or falling back to the environment
pub async fn run_server(path: Option<&str>) -> Result<()> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(config_path).await {
        Ok(config) => config,
        Err(e) => {
            warn!(
                "Configuration file loading failed, using defaults and environment: {}",
                e
            );
            Config::from_env()?
        }
    };

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!("Server starting at: http://{}", config.server().address());
    for rule in &config.guard().rules {
        info!(path = %rule.path, roles = %rule.required_roles(), "Guarded route");
    }

    server.start().await
}
