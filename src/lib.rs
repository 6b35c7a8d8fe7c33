//! # role-guard
//!
//! Role-based access guard for request handlers. A guard is configured with
//! one or more required roles and lets a call through only when the current
//! actor holds at least one of them. Everything else gets
//! `401 {"Warning": "You're Unauthorized"}`.
//!
//! ## Features
//!
//! - **Framework-free core**: [`AccessGuard`] decides for any [`Actor`] passed in explicitly
//! - **Fail closed**: absent actors and empty role sets are denied by default
//! - **actix-web middleware**: wrap a resource, a scope or the whole app
//! - **Config-driven rules**: YAML route rules with longest-prefix matching
//!
//! ## Guarding a plain function
//!
//! ```rust
//! use role_guard::{AccessGuard, Principal};
//!
//! let guard = AccessGuard::new(["admin", "editor"]);
//! let editor = Principal::with_roles(["editor"]);
//!
//! let published = guard.guard(Some(&editor), || "published").unwrap();
//! assert_eq!(published, "published");
//!
//! let nobody: Option<&Principal> = None;
//! assert!(guard.guard(nobody, || "published").is_err());
//! ```
//!
//! ## Guarding an actix-web resource
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpResponse, HttpServer};
//! use role_guard::server::middleware::{HeaderActorResolver, RoleGuardMiddleware};
//! use std::sync::Arc;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     HttpServer::new(|| {
//!         let resolver = Arc::new(HeaderActorResolver::new("x-authenticated-roles").unwrap());
//!         App::new().service(
//!             web::resource("/admin")
//!                 .wrap(RoleGuardMiddleware::new("admin").with_resolver(resolver))
//!                 .route(web::get().to(|| async { HttpResponse::Ok().finish() })),
//!         )
//!     })
//!     .bind(("127.0.0.1", 8080))?
//!     .run()
//!     .await
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AccessGuard, Actor, AuthorizationDecision, EmptyRolePolicy, Principal, RequiredRoles, Role,
};
pub use config::Config;
pub use utils::error::{GuardError, Result};

use serde::Serialize;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
