//! Configuration data models
//!
//! This module defines all configuration structures used by the guard service.

pub mod guard;
pub mod server;

// Re-export all configuration types
pub use guard::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default keep-alive timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default header carrying the upstream actor's roles
pub fn default_actor_header() -> String {
    "x-authenticated-roles".to_string()
}
