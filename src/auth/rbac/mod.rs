//! Role-Based Access Control (RBAC) guard
//!
//! This module provides the role check that sits in front of protected
//! operations: role normalization, the actor capability, and the allow/deny
//! decision.

mod actor;
mod guard;
mod types;

// Re-export public types and structs
pub use actor::{Actor, Principal};
pub use guard::AccessGuard;
pub use types::{AuthorizationDecision, EmptyRolePolicy, RequiredRoles, Role};

#[cfg(test)]
pub(crate) use actor::MockActor;
