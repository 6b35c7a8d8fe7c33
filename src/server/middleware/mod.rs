//! HTTP middleware implementations
//!
//! This module provides the guard middleware for request processing:
//! - Actor resolution from the authentication layer
//! - Role guard for a single resource or scope
//! - Config-driven route guard

mod actor;
mod helpers;
mod role_guard;
mod route_guard;


// Re-export all middleware
pub use actor::{ActorResolver, ExtensionActorResolver, HeaderActorResolver};
pub use helpers::{deny, enforce, resolve_actor, GuardedResponse};
pub use role_guard::{RoleGuardMiddleware, RoleGuardMiddlewareService};
pub use route_guard::{RouteGuardMiddleware, RouteGuardMiddlewareService, RouteGuards};
