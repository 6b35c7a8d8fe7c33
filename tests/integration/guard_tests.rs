//! Guard scenarios through the public API

#[cfg(test)]
mod tests {
    use crate::common::ActorFactory;
    use role_guard::{
        AccessGuard, Actor, AuthorizationDecision, EmptyRolePolicy, GuardError, Principal,
        RequiredRoles, Role,
    };
    use std::cell::Cell;
    use std::collections::HashMap;

    /// Actor answering from a fixed table, counting how often it is asked
    struct TableActor {
        answers: HashMap<&'static str, bool>,
        asked: Cell<usize>,
    }

    impl TableActor {
        fn new(answers: &[(&'static str, bool)]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: Cell::new(0),
            }
        }
    }

    impl Actor for TableActor {
        fn has_role(&self, role: &Role) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answers.get(role.as_str()).copied().unwrap_or(false)
        }
    }

    #[test]
    fn test_admin_scenario_invokes_operation() {
        let guard = AccessGuard::new("admin");
        let actor = TableActor::new(&[("admin", true)]);
        let calls = Cell::new(0);

        let result = guard.guard(Some(&actor), || {
            calls.set(calls.get() + 1);
            42
        });

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_editor_scenario_invokes_operation() {
        let guard = AccessGuard::new(["admin", "editor"]);
        let actor = TableActor::new(&[("admin", false), ("editor", true)]);

        let result = guard.guard(Some(&actor), || "ok");

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(actor.asked.get(), 2);
    }

    #[test]
    fn test_missing_admin_scenario_denies() {
        let guard = AccessGuard::new(vec!["admin"]);
        let actor = TableActor::new(&[("admin", false)]);
        let calls = Cell::new(0);

        let result = guard.guard(Some(&actor), || calls.set(calls.get() + 1));

        assert!(matches!(result, Err(GuardError::AuthorizationDenied)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_single_role_equivalent_to_one_element_list() {
        let single = AccessGuard::new("admin");
        let list = AccessGuard::new(vec!["admin"]);

        assert_eq!(single, list);
        for actor in [ActorFactory::admin(), ActorFactory::editor(), ActorFactory::viewer()] {
            assert_eq!(single.authorize(Some(&actor)), list.authorize(Some(&actor)));
        }
    }

    #[test]
    fn test_decision_is_idempotent() {
        let guard = AccessGuard::new(["admin", "editor"]);
        let actor = ActorFactory::editor();

        let decisions: Vec<AuthorizationDecision> =
            (0..20).map(|_| guard.authorize(Some(&actor))).collect();
        assert!(decisions.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_absent_actor_fails_closed() {
        let guard = AccessGuard::new(["admin", "editor", "viewer"]);
        let nobody: Option<&Principal> = None;

        assert!(guard.check(nobody).is_err());
    }

    #[test]
    fn test_empty_requirement_policies() {
        let empty = RequiredRoles::from(Vec::<String>::new());
        let actor = ActorFactory::with_roles(&["admin", "editor"]);

        let deny = AccessGuard::new(empty.clone());
        assert!(!deny.authorize(Some(&actor)).is_authorized());

        let allow = AccessGuard::new(empty).with_empty_policy(EmptyRolePolicy::Allow);
        assert!(allow.authorize(Some(&actor)).is_authorized());
    }

    #[tokio::test]
    async fn test_async_operation_result_passes_through() {
        let guard = AccessGuard::new("editor");
        let actor = ActorFactory::editor();

        let result = guard
            .guard_async(Some(&actor), || async { Ok::<_, String>(vec!["draft"]) })
            .await
            .unwrap();

        assert_eq!(result, Ok(vec!["draft"]));
    }
}
