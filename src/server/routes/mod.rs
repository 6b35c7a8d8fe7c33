//! HTTP route modules
//!
//! - `health`: public liveness and build information
//! - `protected`: handlers that sit behind the configured route guard

pub mod health;
pub mod protected;

use actix_web::web;

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data
    pub data: T,
}

impl<T: serde::Serialize> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    health::configure_routes(cfg);
    protected::configure_routes(cfg);
}
