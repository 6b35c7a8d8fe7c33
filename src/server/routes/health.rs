//! Health check and version endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health status
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
    pub guarded_routes: usize,
}

/// Basic health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(ApiResponse::success(HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        uptime_seconds: state.uptime_seconds(),
        guarded_routes: state.config.guard.rules.len(),
    }))
}

/// Build information
pub async fn version_info() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(crate::build_info()))
}
