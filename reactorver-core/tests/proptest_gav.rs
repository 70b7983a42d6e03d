//! Property-based tests for artifact identity

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use reactorver_core::domain::{Gav, is_placeholder, is_version_shared};

fn hash_of(gav: &Gav) -> u64 {
    let mut hasher = DefaultHasher::new();
    gav.hash(&mut hasher);
    hasher.finish()
}

fn version() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        r"[0-9]{1,2}\.[0-9]{1,2}(\.[0-9]{1,2})?(-SNAPSHOT)?",
        r"\$\{[a-z.]{1,12}\}",
    ])
}

proptest! {
    #[test]
    fn test_identity_ignores_version(
        group in "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}",
        artifact in "[a-z][a-z0-9-]{0,15}",
        v1 in version(),
        v2 in version(),
    ) {
        let left = Gav::new(group.clone(), artifact.clone(), v1);
        let right = Gav::new(group, artifact, v2);

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(hash_of(&left), hash_of(&right));

        let set: HashSet<Gav> = [left, right].into_iter().collect();
        prop_assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_distinct_artifacts_differ(
        group in "[a-z]{1,8}",
        first in "[a-z]{1,8}",
        second in "[a-z]{1,8}",
        v in version(),
    ) {
        prop_assume!(first != second);
        prop_assert_ne!(
            Gav::new(group.clone(), first, v.clone()),
            Gav::new(group, second, v)
        );
    }

    #[test]
    fn test_inherited_version_is_always_shared(parent in version()) {
        prop_assert!(is_version_shared(None, parent.as_deref()));
    }

    #[test]
    fn test_identical_placeholders_are_shared(name in "[a-z.]{1,12}") {
        let placeholder = format!("${{{}}}", name);
        prop_assert!(is_placeholder(Some(&placeholder)));
        prop_assert!(is_version_shared(Some(&placeholder), Some(&placeholder)));
    }
}
