// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::with_tracing;
use proptest::prelude::*;

fn vars(pairs: &[(&str, &str)]) -> Properties {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn substitute_simple() {
    let vars = vars(&[("env", "prod")]);
    assert_eq!(
        substitute(r#"{"value": "${env}"}"#, &vars),
        r#"{"value": "prod"}"#
    );
}

#[test]
fn substitute_multiple() {
    let vars = vars(&[("a", "1"), ("b", "2")]);
    assert_eq!(substitute("${a} + ${b} = ${a}${b}", &vars), "1 + 2 = 12");
}

#[test]
fn substitute_dotted_keys() {
    let vars = vars(&[("db.host", "db01.example.com")]);
    assert_eq!(substitute("host=${db.host}", &vars), "host=db01.example.com");
}

#[test]
fn substitute_unknown_left_alone() {
    let vars = vars(&[("known", "x")]);
    assert_eq!(
        substitute("${known} ${unknown}", &vars),
        "x ${unknown}"
    );
}

#[test]
fn substitute_with_empty_mapping_is_identity() {
    let text = r#"{"hosts": [{"name": "${host}"}]}"#;
    assert_eq!(substitute(text, &Properties::new()), text);
}

#[test]
fn brace_forms_without_dollar_are_not_tokens() {
    let vars = vars(&[("x", "val")]);
    assert_eq!(substitute("{x} {{x}} ${}", &vars), "{x} {{x}} ${}");
}

#[test]
fn escaped_placeholder_is_literal() {
    let vars = vars(&[("x", "val")]);
    assert_eq!(substitute("$${x} ${x}", &vars), "${x} val");
}

#[test]
fn escaped_placeholder_with_empty_mapping() {
    assert_eq!(substitute("$${x}", &Properties::new()), "${x}");
}

#[test]
fn nested_values_are_expanded() {
    let vars = vars(&[("domain", "example.com"), ("fqdn", "web1.${domain}")]);
    assert_eq!(substitute("${fqdn}", &vars), "web1.example.com");
}

#[test]
fn cyclic_reference_is_left_unexpanded() {
    let vars = vars(&[("a", "${b}"), ("b", "${a}")]);

    let (logs, out) = with_tracing(|| substitute("${a}", &vars));

    assert_eq!(out, "${a}");
    assert!(logs.contains("WARN"), "logs: {}", logs);
    assert!(logs.contains("cyclic token reference"), "logs: {}", logs);
    assert!(logs.contains("a -> b"), "logs: {}", logs);
}

#[test]
fn self_reference_is_left_unexpanded() {
    let vars = vars(&[("a", "x${a}")]);
    assert_eq!(substitute("${a}", &vars), "x${a}");
}

proptest! {
    #[test]
    fn text_without_placeholders_is_unchanged(text in "[^$]*") {
        let vars = vars(&[("a", "1"), ("b", "2")]);
        prop_assert_eq!(substitute(&text, &vars), text);
    }

    #[test]
    fn unmatched_placeholder_survives(key in "[a-z][a-z0-9_.]{0,12}") {
        let text = format!("before ${{{}}} after", key);
        prop_assert_eq!(substitute(&text, &Properties::new()), text.clone());
        let vars = vars(&[("other-key", "x")]);
        prop_assert_eq!(substitute(&text, &vars), text);
    }
}
