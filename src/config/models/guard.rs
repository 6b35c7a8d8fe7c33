//! Guard configuration: which roles each route requires

use super::*;
use crate::auth::rbac::{AccessGuard, EmptyRolePolicy, RequiredRoles};
use serde::{Deserialize, Serialize};

/// Route guard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Header an upstream authentication proxy uses to pass the actor's roles
    #[serde(default = "default_actor_header")]
    pub actor_header: String,
    /// Meaning of a rule whose role list normalizes to nothing
    #[serde(default)]
    pub empty_roles: EmptyRolePolicy,
    /// Per-route role requirements
    #[serde(default)]
    pub rules: Vec<RouteRule>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            actor_header: default_actor_header(),
            empty_roles: EmptyRolePolicy::default(),
            rules: Vec::new(),
        }
    }
}

impl GuardConfig {
    /// Rule with the longest path prefix covering `path`
    pub fn rule_for(&self, path: &str) -> Option<&RouteRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(path))
            .max_by_key(|rule| rule.path.trim_end_matches('/').len())
    }

    /// Build one guard per rule, paired with its path prefix
    pub fn guards(&self) -> Vec<(String, AccessGuard)> {
        self.rules
            .iter()
            .map(|rule| (rule.path.clone(), rule.guard(self.empty_roles)))
            .collect()
    }
}

/// Role requirement for every path under `path`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    /// Path prefix, matched on segment boundaries
    pub path: String,
    /// Required roles; the actor needs any one of them
    pub roles: RoleSpec,
}

impl RouteRule {
    /// Create a rule
    pub fn new(path: impl Into<String>, roles: impl Into<RoleSpec>) -> Self {
        Self {
            path: path.into(),
            roles: roles.into(),
        }
    }

    /// Whether `path` falls under this rule
    ///
    /// `/admin` covers `/admin` and `/admin/users` but not `/administrator`.
    /// `path` is expected in the decoded form the router matches on.
    pub fn matches(&self, path: &str) -> bool {
        let prefix = self.path.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Normalized roles
    pub fn required_roles(&self) -> RequiredRoles {
        RequiredRoles::from(&self.roles)
    }

    /// Guard enforcing this rule
    pub fn guard(&self, empty_roles: EmptyRolePolicy) -> AccessGuard {
        AccessGuard::new(self.required_roles()).with_empty_policy(empty_roles)
    }
}

/// Required roles as written in configuration: one role or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleSpec {
    /// `roles: admin`
    Single(String),
    /// `roles: [admin, editor]`
    Many(Vec<String>),
}

impl From<&str> for RoleSpec {
    fn from(role: &str) -> Self {
        Self::Single(role.to_string())
    }
}

impl From<Vec<&str>> for RoleSpec {
    fn from(roles: Vec<&str>) -> Self {
        Self::Many(roles.into_iter().map(str::to_string).collect())
    }
}

impl From<&RoleSpec> for RequiredRoles {
    fn from(spec: &RoleSpec) -> Self {
        match spec {
            RoleSpec::Single(role) => RequiredRoles::from(role.as_str()),
            RoleSpec::Many(roles) => RequiredRoles::from_iter_normalized(roles.iter()),
        }
    }
}
