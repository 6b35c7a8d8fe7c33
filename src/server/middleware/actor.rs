//! Resolving the current actor for a request
//!
//! The guard never authenticates anyone. It asks an [`ActorResolver`] who
//! the caller is, and the resolver consults whatever the authentication
//! layer left behind.

use crate::auth::rbac::Principal;
use crate::utils::error::{GuardError, Result};
use actix_web::dev::{Payload, ServiceRequest};
use actix_web::http::header::HeaderName;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::future::{ready, Ready};

/// Source of the request-scoped actor
pub trait ActorResolver: Send + Sync {
    /// Actor making this request, or `None` when the caller is anonymous
    fn resolve(&self, req: &ServiceRequest) -> Result<Option<Principal>>;
}

/// Reads a [`Principal`] that an earlier authentication middleware stored in
/// request extensions
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionActorResolver;

impl ActorResolver for ExtensionActorResolver {
    fn resolve(&self, req: &ServiceRequest) -> Result<Option<Principal>> {
        Ok(req.extensions().get::<Principal>().cloned())
    }
}

/// Reads the actor's roles from a header set by a trusted upstream
/// authentication proxy, e.g. `x-authenticated-roles: admin, editor`
///
/// The header must be stripped from client traffic by that proxy.
#[derive(Debug, Clone)]
pub struct HeaderActorResolver {
    header: HeaderName,
}

impl HeaderActorResolver {
    /// Resolver reading `header`
    pub fn new(header: &str) -> Result<Self> {
        let header = HeaderName::from_bytes(header.as_bytes()).map_err(|e| {
            GuardError::Config(format!("Invalid actor header {:?}: {}", header, e))
        })?;
        Ok(Self { header })
    }

    /// Header this resolver reads
    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl ActorResolver for HeaderActorResolver {
    fn resolve(&self, req: &ServiceRequest) -> Result<Option<Principal>> {
        let Some(value) = req.headers().get(&self.header) else {
            return Ok(None);
        };

        let value = value.to_str().map_err(|e| {
            GuardError::actor_resolution(format!("{} is not valid text: {}", self.header, e))
        })?;

        let principal = Principal::from_role_list(value);
        if principal.roles.is_empty() {
            return Ok(None);
        }
        Ok(Some(principal))
    }
}

/// Handlers behind a guard can take the authorized [`Principal`] as an
/// argument
///
/// Extraction fails with the 401 denial when no principal was stored, which
/// includes anonymous callers let through by [`EmptyRolePolicy::Allow`].
/// Handlers that accept anonymous callers take `Option<Principal>` instead.
///
/// [`EmptyRolePolicy::Allow`]: crate::auth::rbac::EmptyRolePolicy::Allow
impl FromRequest for Principal {
    type Error = GuardError;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Principal>()
                .cloned()
                .ok_or(GuardError::AuthorizationDenied),
        )
    }
}
