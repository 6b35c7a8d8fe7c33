//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Role identifier
///
/// Identifiers are trimmed on construction and compared exactly, so
/// `"admin"` and `"Admin"` are different roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Create a role from an identifier
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Role identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl From<&String> for Role {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

/// Roles required by a protected operation
///
/// Built from a single role or any sequence of roles. Blank identifiers are
/// dropped and duplicates removed, keeping the order of first occurrence.
/// The set can end up empty; what that means is decided by
/// [`EmptyRolePolicy`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredRoles {
    roles: Vec<Role>,
}

impl RequiredRoles {
    /// Normalize any sequence of role identifiers
    pub fn from_iter_normalized<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        let mut normalized: Vec<Role> = Vec::new();
        for role in roles.into_iter().map(Into::into) {
            if role.is_blank() || normalized.contains(&role) {
                continue;
            }
            normalized.push(role);
        }
        Self { roles: normalized }
    }

    /// Roles in configured order
    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.roles.iter()
    }

    /// Number of distinct roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no role is required
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Whether `role` is one of the required roles
    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }
}

impl fmt::Display for RequiredRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.roles.iter().map(Role::as_str).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

impl<'a> IntoIterator for &'a RequiredRoles {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}

impl From<Role> for RequiredRoles {
    fn from(role: Role) -> Self {
        Self::from_iter_normalized([role])
    }
}

impl From<&str> for RequiredRoles {
    fn from(role: &str) -> Self {
        Self::from_iter_normalized([role])
    }
}

impl From<String> for RequiredRoles {
    fn from(role: String) -> Self {
        Self::from_iter_normalized([role])
    }
}

impl<R: Into<Role>> From<Vec<R>> for RequiredRoles {
    fn from(roles: Vec<R>) -> Self {
        Self::from_iter_normalized(roles)
    }
}

impl<R: Into<Role>, const N: usize> From<[R; N]> for RequiredRoles {
    fn from(roles: [R; N]) -> Self {
        Self::from_iter_normalized(roles)
    }
}

impl<R: Into<Role> + Clone> From<&[R]> for RequiredRoles {
    fn from(roles: &[R]) -> Self {
        Self::from_iter_normalized(roles.iter().cloned())
    }
}

/// What an empty [`RequiredRoles`] set means
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyRolePolicy {
    /// Nobody is authorized
    #[default]
    Deny,
    /// Everybody is authorized, including anonymous callers
    Allow,
}

/// Outcome of a single authorization check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationDecision {
    /// The actor holds a required role
    Authorized {
        /// First required role (in configured order) the actor holds.
        /// `None` when an empty set was allowed by policy.
        granted_by: Option<Role>,
    },
    /// The actor holds none of the required roles
    Denied,
}

impl AuthorizationDecision {
    /// Whether the call may proceed
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }

    /// Role that granted access, if any
    pub fn granted_by(&self) -> Option<&Role> {
        match self {
            Self::Authorized { granted_by } => granted_by.as_ref(),
            Self::Denied => None,
        }
    }
}
