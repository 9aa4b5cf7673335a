// environ-rs: In-memory environment lists
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for environment lists.
//!
//! Exercises the public `EnvList` API the way an embedding application would.

use environ_rs::env::EnvList;
use environ_rs::error::EnvError;

#[derive(Debug)]
struct Settings {
    _retries: u8,
}

// =============================================================================
// Ordering and replacement
// =============================================================================

#[test]
fn distinct_puts_keep_insertion_order() {
    let names = ["HOME", "PATH", "SHELL", "LANG", "TERM"];
    let mut env = EnvList::new();
    for (i, name) in names.iter().enumerate() {
        env.put(name, i.to_string());
    }

    assert!(names.iter().all(|name| env.contains(name)));
    let order: Vec<_> = env.vars().map(|(name, _)| name).collect();
    assert_eq!(order, names);
}

#[test]
fn put_existing_keeps_length_and_position() {
    let mut env = EnvList::new();
    env.put("a", "1").put("b", "2").put("c", "3");

    for (name, value) in [("b", "20"), ("a", "10"), ("c", "30"), ("b", "200")] {
        let len = env.len();
        let index = env.index_of(name);
        env.put(name, value);
        assert_eq!(env.len(), len);
        assert_eq!(env.index_of(name), index);
        assert_eq!(env.get(name), value);
    }

    assert_eq!(env.as_slice(), ["a=10", "b=200", "c=30"]);
}

#[test]
fn put_scenario_from_empty() {
    let mut env = EnvList::new();
    env.put("a", "1");
    env.put("b", "2");
    env.put("a", "9");

    assert_eq!(env.len(), 2);
    assert_eq!(env.index_of("a"), Some(0));
    assert_eq!(env.as_slice(), ["a=9", "b=2"]);
}

// =============================================================================
// Unset
// =============================================================================

#[test]
fn unset_never_shrinks() {
    let mut env = EnvList::new();
    env.put("KEEP", "1").put("DROP", "2");

    env.unset("DROP");
    env.unset("NEVER_SET");

    assert_eq!(env.len(), 3);
    assert!(env.contains("DROP"));
    assert!(env.contains("NEVER_SET"));
    assert_eq!(env.get("DROP"), "");
    insta::assert_snapshot!(env.to_string(), @r"
    0 = KEEP=1
    1 = DROP=
    2 = NEVER_SET=
    ");
}

// =============================================================================
// Lookup edge cases
// =============================================================================

#[test]
fn lookup_on_empty_list() {
    let env = EnvList::new();
    assert_eq!(env.index_of("anything"), None);
    assert!(!env.contains("anything"));
    assert!(!env.get_bool("missing"));
    assert_eq!(env.get_int("missing"), 0);
    assert!(env.get_float("missing").abs() < f64::EPSILON);
}

#[test]
fn empty_name_matches_leading_equals_only() {
    let mut env = EnvList::from_entries(["=weird", "A=1"]);
    assert_eq!(env.index_of(""), Some(0));
    assert_eq!(env.get(""), "weird");

    env.put("", "fixed");
    assert_eq!(env.as_slice(), ["=fixed", "A=1"]);
}

#[test]
fn absent_and_empty_read_the_same() {
    let mut env = EnvList::new();
    env.put("EMPTY", "");
    assert_eq!(env.get("EMPTY"), env.get("ABSENT"));
    assert!(env.contains("EMPTY"));
    assert!(!env.contains("ABSENT"));
}

// =============================================================================
// Typed round trips
// =============================================================================

#[test]
fn typed_round_trips() {
    let mut env = EnvList::new();
    env.set("flag", &true).unwrap();
    env.set("count", &123_i32).unwrap();
    env.set("ratio", &1.01_f64).unwrap();
    env.set("wide", &-4_000_000_000_i64).unwrap();
    env.set("unsigned", &4_000_000_000_u32).unwrap();

    assert!(env.get_bool("flag"));
    assert_eq!(env.get_int("count"), 123);
    assert!((env.get_float("ratio") - 1.01).abs() < f64::EPSILON);
    assert_eq!(env.get_int("wide"), -4_000_000_000);
    assert_eq!(env.get_int("unsigned"), 4_000_000_000);
}

#[test]
fn unsupported_type_names_the_key() {
    let mut env = EnvList::new();
    env.put("retries", "3");
    let before = env.clone();

    let err = env
        .set("retries", &Settings { _retries: 5 })
        .unwrap_err();

    assert_eq!(env, before);
    let EnvError::UnsupportedType { name, type_name } = &err else {
        panic!("expected UnsupportedType, got {err:?}");
    };
    assert_eq!(name, "retries");
    assert!(type_name.contains("Settings"), "{type_name}");
    assert!(err.to_string().starts_with("set retries: value \""));
    assert!(err.to_string().ends_with("\" is not supported"));
}

#[test]
fn unparsable_values_read_as_defaults() {
    let mut env = EnvList::new();
    env.put("flag", "yes").put("count", "12abc").put("ratio", "1,5");

    assert!(!env.get_bool("flag"));
    assert_eq!(env.get_int("count"), 0);
    assert!(env.get_float("ratio").abs() < f64::EPSILON);
}

#[test]
fn write_to_matches_print_format() {
    let mut env = EnvList::new();
    env.put("first", "value")
        .put("second", "value")
        .put("third", "value");

    let mut out = Vec::new();
    env.write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 = first=value\n1 = second=value\n2 = third=value\n"
    );
}
