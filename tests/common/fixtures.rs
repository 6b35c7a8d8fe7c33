//! Test fixtures

use role_guard::config::{Config, GuardConfig, RouteRule, ServerConfig};
use role_guard::Principal;

/// Header the sample configuration reads roles from
pub const ROLES_HEADER: &str = "x-authenticated-roles";

/// Factory for actors in common shapes
pub struct ActorFactory;

impl ActorFactory {
    pub fn admin() -> Principal {
        Principal::with_roles(["admin"]).subject("admin-1")
    }

    pub fn editor() -> Principal {
        Principal::with_roles(["editor"]).subject("editor-1")
    }

    pub fn viewer() -> Principal {
        Principal::with_roles(["viewer"]).subject("viewer-1")
    }

    pub fn with_roles(roles: &[&str]) -> Principal {
        Principal::with_roles(roles.iter().copied())
    }
}

/// Configuration with `/admin` for admins and `/posts` for admins or editors
pub fn sample_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 18080,
            ..Default::default()
        },
        guard: GuardConfig {
            actor_header: ROLES_HEADER.to_string(),
            rules: vec![
                RouteRule::new("/admin", "admin"),
                RouteRule::new("/posts", vec!["admin", "editor"]),
            ],
            ..Default::default()
        },
    }
}
