//! Property-based tests for the session encoding

use proptest::prelude::*;
use reactorver_core::Gav;
use reactorver_propagation::{ManagedFlag, Session};

fn artifact() -> impl Strategy<Value = (String, Option<String>, Option<bool>)> {
    (
        "[a-z][a-z0-9-]{0,12}",
        proptest::option::of(r"[0-9]\.[0-9]{1,2}(-SNAPSHOT)?"),
        proptest::option::of(any::<bool>()),
    )
}

proptest! {
    #[test]
    fn test_session_round_trip(
        version in r"[0-9]\.[0-9]\.[0-9]",
        group in "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}",
        artifacts in proptest::collection::vec(artifact(), 0..12),
        modules in proptest::collection::vec(r"/work/[a-z]{1,8}/pom\.xml", 0..6),
    ) {
        let mut session = Session::with_version(version, "/work");
        session.establish_root(group.clone());
        for (artifact_id, artifact_version, managed) in &artifacts {
            let gav = Gav::new(group.clone(), artifact_id.clone(), artifact_version.clone());
            let added = session.add_project(gav.clone());
            if let (true, Some(managed)) = (added, managed) {
                session.resolve_managed(&gav, *managed).unwrap();
            }
        }
        for module in &modules {
            session.add_module_pom_path(module.clone());
        }

        let encoded = session.encode().unwrap();
        let decoded = Session::decode(&encoded).unwrap();

        prop_assert_eq!(decoded.projects(), session.projects());
        prop_assert_eq!(decoded.module_pom_paths(), session.module_pom_paths());
        prop_assert_eq!(decoded.root_group_id(), session.root_group_id());
        for gav in session.projects() {
            prop_assert_eq!(decoded.managed_flag(gav), session.managed_flag(gav));
        }
        prop_assert_eq!(decoded.encode().unwrap(), encoded);
    }

    #[test]
    fn test_flag_resolves_at_most_once(first in any::<bool>(), second in any::<bool>()) {
        let resolved = ManagedFlag::Unset.resolve(first).unwrap();
        prop_assert!(!resolved.is_unset());
        prop_assert_eq!(resolved.resolve(second), Err(resolved));
    }
}
