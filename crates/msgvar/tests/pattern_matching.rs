//! Integration tests for pattern-key parsing and first-match-wins matching.

use std::collections::HashMap;

use msgvar::interpreter::{find_match, infer_selector_names, pattern_matches};
use msgvar::{parse_pattern_key, ClauseValue, MatchTable};

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Pattern-key parsing
// =============================================================================

#[test]
fn parse_single_clause() {
    let key = parse_pattern_key("countPlural=one");
    assert_eq!(key.as_str(), "countPlural=one");
    assert_eq!(key.clauses().len(), 1);
    assert_eq!(key.clauses()[0].selector, "countPlural");
    assert_eq!(
        key.clauses()[0].value,
        ClauseValue::Literal("one".to_string())
    );
}

#[test]
fn parse_multi_clause_with_wildcard() {
    let key = parse_pattern_key("countPlural=one, platform=*");
    assert_eq!(key.clauses().len(), 2);
    assert_eq!(key.clauses()[1].selector, "platform");
    assert_eq!(key.clauses()[1].value, ClauseValue::Wildcard);
}

#[test]
fn clauses_without_equals_are_skipped() {
    let key = parse_pattern_key("platform");
    assert!(key.clauses().is_empty());

    // A bare wildcard key has zero clauses and matches everything.
    let key = parse_pattern_key("*");
    assert!(key.clauses().is_empty());
    assert!(pattern_matches(&key, &values(&[("platform", "ios")])));
    assert!(pattern_matches(&key, &HashMap::new()));
}

// =============================================================================
// Matching
// =============================================================================

#[test]
fn literal_clause_requires_exact_string_equality() {
    let key = parse_pattern_key("platform=ios");
    assert!(pattern_matches(&key, &values(&[("platform", "ios")])));
    assert!(!pattern_matches(&key, &values(&[("platform", "iOS")])));
    assert!(!pattern_matches(&key, &values(&[("other", "ios")])));
}

#[test]
fn wildcard_clause_is_satisfied_unconditionally() {
    let key = parse_pattern_key("platform=*");
    assert!(pattern_matches(&key, &values(&[("platform", "ios")])));
    assert!(pattern_matches(&key, &HashMap::new()));
}

#[test]
fn all_clauses_must_be_satisfied() {
    let key = parse_pattern_key("countPlural=one, platform=ios");
    assert!(pattern_matches(
        &key,
        &values(&[("countPlural", "one"), ("platform", "ios")])
    ));
    assert!(!pattern_matches(
        &key,
        &values(&[("countPlural", "one"), ("platform", "android")])
    ));
}

#[test]
fn wildcard_fallback_entry_wins_when_literals_miss() {
    let table: MatchTable = [("platform=android", "A"), ("platform=*", "Def")]
        .into_iter()
        .collect();
    let (key, template) = find_match(&table, &values(&[("platform", "ios")])).unwrap();
    assert_eq!(key.as_str(), "platform=*");
    assert_eq!(template, "Def");
}

#[test]
fn first_match_wins_over_more_specific_later_entries() {
    // Both entries are satisfiable; the matcher must return the first
    // in sequence order, not the "more specific" later one.
    let table: MatchTable = [("countPlural=*", "first"), ("countPlural=one", "second")]
        .into_iter()
        .collect();
    let (_, template) = find_match(&table, &values(&[("countPlural", "one")])).unwrap();
    assert_eq!(template, "first");
}

#[test]
fn exhausted_table_returns_none() {
    let table: MatchTable = [("platform=android", "A"), ("platform=ios", "B")]
        .into_iter()
        .collect();
    assert!(find_match(&table, &values(&[("platform", "web")])).is_none());
}

// =============================================================================
// Selector-name inference
// =============================================================================

#[test]
fn inference_collects_distinct_names_in_first_seen_order() {
    let table: MatchTable = [
        ("b=1, a=2", "x"),
        ("a=3, c=4", "y"),
        ("c=5", "z"),
    ]
    .into_iter()
    .collect();
    assert_eq!(infer_selector_names(&table), vec!["b", "a", "c"]);
}

#[test]
fn inference_follows_each_sequence_own_order() {
    // Same selector names, different key order: inference must follow
    // each sequence's own first-seen order, never a global sort.
    let forward: MatchTable = [("alpha=1, beta=2", "x")].into_iter().collect();
    let reverse: MatchTable = [("beta=2, alpha=1", "x")].into_iter().collect();
    assert_eq!(infer_selector_names(&forward), vec!["alpha", "beta"]);
    assert_eq!(infer_selector_names(&reverse), vec!["beta", "alpha"]);
}

#[test]
fn inference_is_deterministic() {
    let table: MatchTable = [
        ("countPlural=one, platform=ios", "a"),
        ("platform=*, countPlural=other", "b"),
    ]
    .into_iter()
    .collect();
    let first = infer_selector_names(&table);
    for _ in 0..10 {
        assert_eq!(infer_selector_names(&table), first);
    }
}
