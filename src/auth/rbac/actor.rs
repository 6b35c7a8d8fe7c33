//! Actors: the authenticated identities a guard asks about

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::types::Role;

/// An authenticated identity that can be asked about its roles
///
/// Implemented by whatever the authentication layer produces. The guard only
/// ever calls [`Actor::has_role`] and never holds on to the actor.
#[cfg_attr(test, mockall::automock)]
pub trait Actor {
    /// Whether this actor holds `role`
    fn has_role(&self, role: &Role) -> bool;
}

impl<A: Actor + ?Sized> Actor for &A {
    fn has_role(&self, role: &Role) -> bool {
        (**self).has_role(role)
    }
}

impl<A: Actor + ?Sized> Actor for Box<A> {
    fn has_role(&self, role: &Role) -> bool {
        (**self).has_role(role)
    }
}

impl<A: Actor + ?Sized> Actor for Arc<A> {
    fn has_role(&self, role: &Role) -> bool {
        (**self).has_role(role)
    }
}

/// Concrete actor carrying an optional subject id and a role set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Subject identifier assigned by the authentication layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Roles held by the subject
    #[serde(default)]
    pub roles: BTreeSet<Role>,
}

impl Principal {
    /// Principal holding the given roles
    pub fn with_roles<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        Self {
            subject: None,
            roles: roles
                .into_iter()
                .map(Into::into)
                .filter(|r: &Role| !r.is_blank())
                .collect(),
        }
    }

    /// Set the subject identifier
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Parse a comma-separated role list such as `"admin, editor"`
    pub fn from_role_list(list: &str) -> Self {
        Self::with_roles(list.split(','))
    }
}

impl Actor for Principal {
    fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }
}
