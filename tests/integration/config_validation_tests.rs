//! Configuration loading and validation through the public API

#[cfg(test)]
mod tests {
    use role_guard::config::{Config, RoleSpec, RouteRule, Validate};
    use role_guard::{EmptyRolePolicy, GuardError};

    use crate::common::sample_config;

    #[test]
    fn test_sample_config_is_valid() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_port_zero_rejected() {
        let mut config = sample_config();
        config.server.port = 0;

        let result = config.validate();
        assert!(matches!(result, Err(GuardError::Config(msg)) if msg.contains("port")));
    }

    #[test]
    fn test_rule_without_roles_rejected() {
        let mut config = sample_config();
        config.guard.rules.push(RouteRule {
            path: "/reports".to_string(),
            roles: RoleSpec::Many(vec![]),
        });

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rule_validate_trait() {
        assert!(RouteRule::new("/ok", "admin").validate().is_ok());
        assert!(RouteRule::new("relative", "admin").validate().is_err());
    }

    #[test]
    fn test_yaml_accepts_both_role_forms() {
        let config = Config::from_yaml_str(
            r#"
guard:
  empty_roles: deny
  rules:
    - path: /one
      roles: admin
    - path: /many
      roles:
        - admin
        - editor
"#,
        )
        .unwrap();

        assert_eq!(config.guard.empty_roles, EmptyRolePolicy::Deny);
        assert_eq!(config.guard.rules[0].required_roles().len(), 1);
        assert_eq!(config.guard.rules[1].required_roles().len(), 2);
    }

    #[test]
    fn test_unknown_empty_policy_rejected() {
        let result = Config::from_yaml_str("guard:\n  empty_roles: sometimes\n");
        assert!(matches!(result, Err(GuardError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_shipped_config_file_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/guard.yaml");
        let config = Config::from_file(path).await.unwrap();

        assert_eq!(config.guard.rules.len(), 2);
        assert_eq!(config.guard.rules[0].path, "/admin");
    }
}
