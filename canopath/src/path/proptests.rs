//! Property-based tests for path handling.
//!
//! Note: The canonicalize module already has property tests for raw string
//! canonicalization. This module focuses on `CanonicalPath` composition.

use super::canonicalize::canonicalize;
use super::types::CanonicalPath;
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn component_or_dots_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => path_component_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn any_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(component_or_dots_strategy(), 0..8),
        any::<bool>(),
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = if absolute { "/".to_string() } else { String::new() };
            path.push_str(&parts.join("/"));
            if trailing && !path.is_empty() {
                path.push('/');
            }
            path
        })
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Constructing from a canonical string is the identity
    #[test]
    fn construction_idempotent(raw in any_path_strategy()) {
        let path = CanonicalPath::new(&raw);
        prop_assert_eq!(CanonicalPath::new(path.as_str()), path);
    }

    // Rejoining the segments gives back the canonical form, minus a trailing slash
    #[test]
    fn segments_round_trip(raw in any_path_strategy()) {
        let path = CanonicalPath::new(&raw);
        let rejoined = canonicalize(&path.segments().join("/"));
        let expected = canonicalize(path.as_str().trim_end_matches('/'));
        let expected = if expected.is_empty() && path.is_absolute() { "/".to_string() } else { expected };
        prop_assert_eq!(rejoined, expected);
    }

    // An absolute right-hand side always wins
    #[test]
    fn concat_absolute_overrides(base in any_path_strategy(), leaf in relative_path_strategy()) {
        let absolute = CanonicalPath::new(format!("/{leaf}"));
        prop_assert_eq!(CanonicalPath::new(&base).concat(&absolute), absolute);
    }

    // concat and concat_to_self agree
    #[test]
    fn concat_matches_concat_to_self(base in any_path_strategy(), leaf in any_path_strategy()) {
        let base = CanonicalPath::new(&base);
        let leaf = CanonicalPath::new(&leaf);
        let mut in_place = base.clone();
        in_place.concat_to_self(&leaf);
        prop_assert_eq!(base.concat(&leaf), in_place);
    }

    // Joining a plain name then taking the parent gets back to the base
    #[test]
    fn parent_undoes_concat(base in relative_path_strategy(), name in path_component_strategy()) {
        let base = CanonicalPath::new(format!("/{base}"));
        let child = base.concat(&CanonicalPath::new(&name));
        prop_assert_eq!(child.name(), name.as_str());
        prop_assert_eq!(child.parent(), CanonicalPath::new(format!("{base}/")));
    }

    // The name is always the last segment
    #[test]
    fn name_is_last_segment(raw in any_path_strategy()) {
        let path = CanonicalPath::new(&raw);
        let segments = path.segments();
        prop_assert_eq!(path.name(), segments.last().copied().unwrap_or(""));
    }
}
