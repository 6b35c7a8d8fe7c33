//! Helper functions shared by the guard middleware

use crate::auth::rbac::{AccessGuard, AuthorizationDecision, Principal};
use crate::server::middleware::actor::{ActorResolver, ExtensionActorResolver};
use crate::utils::error::unauthorized_response;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpMessage};
use futures::future::{ready, LocalBoxFuture};
use tracing::{debug, warn};

/// Response type produced by guarded services: the inner body, or the denial
pub type GuardedResponse<B> = ServiceResponse<EitherBody<B>>;

/// Resolve the actor for `req`
///
/// Resolution order: the middleware's own resolver, then a
/// `web::Data<dyn ActorResolver>` registered as app data, then request
/// extensions. A failing resolver yields `None`.
pub fn resolve_actor(
    req: &ServiceRequest,
    resolver: Option<&dyn ActorResolver>,
) -> Option<Principal> {
    let app_resolver = req.app_data::<web::Data<dyn ActorResolver>>();
    let result = match (resolver, app_resolver) {
        (Some(resolver), _) => resolver.resolve(req),
        (None, Some(resolver)) => resolver.resolve(req),
        (None, None) => ExtensionActorResolver.resolve(req),
    };

    result.unwrap_or_else(|e| {
        warn!(path = %req.path(), error = %e, "Actor resolution failed, treating caller as anonymous");
        None
    })
}

/// Answer `req` with the 401 denial without calling the inner service
pub fn deny<B>(req: ServiceRequest) -> GuardedResponse<B> {
    req.into_response(unauthorized_response()).map_into_right_body()
}

/// Decide `req` against `guard` and either forward it to `service` or answer
/// with the 401 denial
///
/// On success the resolved principal is stored in request extensions so
/// handlers can extract it.
pub fn enforce<S, B>(
    service: &S,
    guard: &AccessGuard,
    resolver: Option<&dyn ActorResolver>,
    req: ServiceRequest,
) -> LocalBoxFuture<'static, Result<GuardedResponse<B>, actix_web::Error>>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    let principal = resolve_actor(&req, resolver);

    match guard.authorize(principal.as_ref()) {
        AuthorizationDecision::Denied => {
            debug!(
                path = %req.path(),
                required = %guard.required_roles(),
                "Request denied"
            );
            Box::pin(ready(Ok(deny(req))))
        }
        AuthorizationDecision::Authorized { granted_by } => {
            debug!(
                path = %req.path(),
                granted_by = granted_by.as_ref().map(|r| r.as_str()).unwrap_or("<empty policy>"),
                "Request authorized"
            );
            if let Some(principal) = principal {
                req.extensions_mut().insert(principal);
            }
            let fut = service.call(req);
            Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
        }
    }
}
