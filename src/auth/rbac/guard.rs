//! Access guard: the allow/deny decision for a protected operation

use crate::utils::error::{GuardError, Result};
use std::future::Future;

use super::actor::Actor;
use super::types::{AuthorizationDecision, EmptyRolePolicy, RequiredRoles, Role};

/// Gate in front of a protected operation
///
/// The required roles are normalized once when the guard is built. Every
/// call then re-evaluates the decision against the actor passed in, so a
/// single guard can be shared across threads and requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    required: RequiredRoles,
    empty_policy: EmptyRolePolicy,
}

impl AccessGuard {
    /// Guard requiring any one of `roles`
    pub fn new(roles: impl Into<RequiredRoles>) -> Self {
        Self {
            required: roles.into(),
            empty_policy: EmptyRolePolicy::default(),
        }
    }

    /// Override what an empty role set means
    pub fn with_empty_policy(mut self, policy: EmptyRolePolicy) -> Self {
        self.empty_policy = policy;
        self
    }

    /// Normalized required roles
    pub fn required_roles(&self) -> &RequiredRoles {
        &self.required
    }

    /// Policy applied when no role is required
    pub fn empty_policy(&self) -> EmptyRolePolicy {
        self.empty_policy
    }

    /// Decide whether `actor` may proceed
    ///
    /// `None` stands for an absent or unauthenticated actor and holds no
    /// roles.
    pub fn authorize<A: Actor + ?Sized>(&self, actor: Option<&A>) -> AuthorizationDecision {
        if self.required.is_empty() {
            return match self.empty_policy {
                EmptyRolePolicy::Allow => AuthorizationDecision::Authorized { granted_by: None },
                EmptyRolePolicy::Deny => AuthorizationDecision::Denied,
            };
        }

        let Some(actor) = actor else {
            return AuthorizationDecision::Denied;
        };

        match self.required.iter().find(|role| actor.has_role(role)) {
            Some(role) => AuthorizationDecision::Authorized {
                granted_by: Some(role.clone()),
            },
            None => AuthorizationDecision::Denied,
        }
    }

    /// Like [`authorize`](Self::authorize), but as a `Result`
    ///
    /// Returns the granting role, or `None` when an empty set was allowed.
    pub fn check<A: Actor + ?Sized>(&self, actor: Option<&A>) -> Result<Option<Role>> {
        match self.authorize(actor) {
            AuthorizationDecision::Authorized { granted_by } => Ok(granted_by),
            AuthorizationDecision::Denied => Err(GuardError::AuthorizationDenied),
        }
    }

    /// Run `op` if `actor` is authorized
    ///
    /// On denial `op` is dropped without being called.
    pub fn guard<A, F, T>(&self, actor: Option<&A>, op: F) -> Result<T>
    where
        A: Actor + ?Sized,
        F: FnOnce() -> T,
    {
        self.check(actor)?;
        Ok(op())
    }

    /// Async form of [`guard`](Self::guard)
    ///
    /// The decision is made before `op` is called, so on denial no future
    /// is ever created.
    pub async fn guard_async<A, F, Fut>(&self, actor: Option<&A>, op: F) -> Result<Fut::Output>
    where
        A: Actor + ?Sized,
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        self.check(actor)?;
        Ok(op().await)
    }
}
