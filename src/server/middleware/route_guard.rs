//! Config-driven route guard middleware
//!
//! Applies the `guard.rules` section of the configuration: each request is
//! checked against the rule with the longest matching path prefix. Paths
//! without a rule pass through untouched.
//!
//! Rules are matched against the path the router sees, which has
//! percent-encoded characters already decoded (`/%61dmin` routes to
//! `/admin`). The router leaves `%2F`, `%2B` and `%25` encoded; a path that
//! still carries one of those is denied whenever any rule is configured.

use crate::auth::rbac::AccessGuard;
use crate::config::GuardConfig;
use crate::server::middleware::actor::ActorResolver;
use crate::server::middleware::helpers::{deny, enforce, GuardedResponse};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Guards built from configuration, one per rule
#[derive(Debug, Clone)]
pub struct RouteGuards {
    config: GuardConfig,
    guards: HashMap<String, AccessGuard>,
}

impl RouteGuards {
    /// Normalize every configured rule into a guard
    pub fn from_config(config: &GuardConfig) -> Self {
        Self {
            config: config.clone(),
            guards: config.guards().into_iter().collect(),
        }
    }

    /// Guard covering `path`, if any rule matches
    pub fn guard_for(&self, path: &str) -> Option<&AccessGuard> {
        self.config
            .rule_for(path)
            .and_then(|rule| self.guards.get(&rule.path))
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    /// Whether no rule is configured
    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

/// Middleware enforcing [`RouteGuards`]
#[derive(Clone)]
pub struct RouteGuardMiddleware {
    guards: Arc<RouteGuards>,
    resolver: Option<Arc<dyn ActorResolver>>,
}

impl RouteGuardMiddleware {
    /// Middleware enforcing the rules in `config`
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            guards: Arc::new(RouteGuards::from_config(config)),
            resolver: None,
        }
    }

    /// Resolve actors with `resolver` instead of app data or extensions
    pub fn with_resolver(mut self, resolver: Arc<dyn ActorResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for RouteGuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = GuardedResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RouteGuardMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardMiddlewareService {
            service,
            guards: Arc::clone(&self.guards),
            resolver: self.resolver.clone(),
        }))
    }
}

/// Service implementation for the route guard middleware
pub struct RouteGuardMiddlewareService<S> {
    service: S,
    guards: Arc<RouteGuards>,
    resolver: Option<Arc<dyn ActorResolver>>,
}

impl<S, B> Service<ServiceRequest> for RouteGuardMiddlewareService<S>
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
        let path = req.match_info().as_str();
        if !self.guards.is_empty() && path.contains('%') {
            debug!(path = %req.path(), "Request denied, path keeps encoded characters");
            return Box::pin(ready(Ok(deny(req))));
        }

        match self.guards.guard_for(path) {
            Some(guard) => enforce(&self.service, guard, self.resolver.as_deref(), req),
            None => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}
