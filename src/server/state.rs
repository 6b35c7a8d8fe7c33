//! Application state shared across HTTP handlers

use crate::config::Config;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// When the server was created
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            started_at: Utc::now(),
        }
    }

    /// Seconds since the server was created
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
