//! Core configuration validators
//!
//! Validation implementations for ServerConfig, GuardConfig and RouteRule.

use super::trait_def::Validate;
use crate::config::models::*;
use actix_web::http::header::HeaderName;
use std::collections::HashSet;
use tracing::debug;

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err("Worker count must be greater than 0".to_string());
            }
            if workers > 1000 {
                return Err("Worker count seems too high (>1000)".to_string());
            }
        }

        if self.timeout == 0 {
            return Err("Server timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for GuardConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating guard configuration");

        if HeaderName::from_bytes(self.actor_header.as_bytes()).is_err() {
            return Err(format!(
                "Actor header is not a valid HTTP header name: {:?}",
                self.actor_header
            ));
        }

        let mut paths = HashSet::new();
        for rule in &self.rules {
            rule.validate()?;
            if !paths.insert(rule.path.trim_end_matches('/')) {
                return Err(format!("Duplicate guard rule path: {}", rule.path));
            }
        }

        Ok(())
    }
}

impl Validate for RouteRule {
    fn validate(&self) -> Result<(), String> {
        if !self.path.starts_with('/') {
            return Err(format!("Guard rule path must start with '/': {}", self.path));
        }

        if self.required_roles().is_empty() {
            return Err(format!(
                "Guard rule for {} must name at least one role",
                self.path
            ));
        }

        Ok(())
    }
}
