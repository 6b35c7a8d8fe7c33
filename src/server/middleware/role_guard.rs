//! Role guard middleware
//!
//! Composed explicitly in front of a handler, resource or scope:
//!
//! ```rust,no_run
//! use actix_web::{web, App, HttpResponse};
//! use role_guard::server::middleware::RoleGuardMiddleware;
//!
//! let app = App::new().service(
//!     web::resource("/posts")
//!         .wrap(RoleGuardMiddleware::new(["admin", "editor"]))
//!         .route(web::post().to(|| async { HttpResponse::Created().finish() })),
//! );
//! ```

use crate::auth::rbac::{AccessGuard, EmptyRolePolicy, RequiredRoles};
use crate::server::middleware::actor::ActorResolver;
use crate::server::middleware::helpers::{enforce, GuardedResponse};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

/// Middleware allowing a request only when its actor holds a required role
#[derive(Clone)]
pub struct RoleGuardMiddleware {
    guard: Arc<AccessGuard>,
    resolver: Option<Arc<dyn ActorResolver>>,
}

impl RoleGuardMiddleware {
    /// Require any one of `roles`
    pub fn new(roles: impl Into<RequiredRoles>) -> Self {
        Self::from_guard(AccessGuard::new(roles))
    }

    /// Enforce an already configured guard
    pub fn from_guard(guard: AccessGuard) -> Self {
        Self {
            guard: Arc::new(guard),
            resolver: None,
        }
    }

    /// Override what an empty role set means
    pub fn with_empty_policy(self, policy: EmptyRolePolicy) -> Self {
        let guard = (*self.guard).clone().with_empty_policy(policy);
        Self {
            guard: Arc::new(guard),
            resolver: self.resolver,
        }
    }

    /// Resolve actors with `resolver` instead of app data or extensions
    pub fn with_resolver(mut self, resolver: Arc<dyn ActorResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Guard this middleware enforces
    pub fn guard(&self) -> &AccessGuard {
        &self.guard
    }
}

impl<S, B> Transform<S, ServiceRequest> for RoleGuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = GuardedResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RoleGuardMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RoleGuardMiddlewareService {
            service,
            guard: Arc::clone(&self.guard),
            resolver: self.resolver.clone(),
        }))
    }
}

/// Service implementation for the role guard middleware
pub struct RoleGuardMiddlewareService<S> {
    service: S,
    guard: Arc<AccessGuard>,
    resolver: Option<Arc<dyn ActorResolver>>,
}

impl<S, B> Service<ServiceRequest> for RoleGuardMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = GuardedResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        enforce(&self.service, &self.guard, self.resolver.as_deref(), req)
    }
}
