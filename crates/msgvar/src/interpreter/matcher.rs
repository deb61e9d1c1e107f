//! First-match-wins pattern matching over the ordered match table.
//!
//! Entries are walked in their given order and the first fully-satisfied
//! one wins. This is first-match, not most-specific-match: correctness
//! depends on the producer emitting specific patterns before wildcard
//! ones, so the order must never be disturbed.

use crate::interpreter::selector::SelectorValues;
use crate::types::{ClauseValue, MatchTable, PatternKey};

/// Walk the match table in order and return the first entry whose
/// pattern key is fully satisfied, or `None` when no entry matches.
pub fn find_match<'a>(
    table: &'a MatchTable,
    values: &SelectorValues,
) -> Option<&'a (PatternKey, String)> {
    table.iter().find(|(key, _)| pattern_matches(key, values))
}

/// Whether every clause of a pattern key is satisfied.
///
/// A literal clause is satisfied when it equals the selector's current
/// value by string comparison; a wildcard clause is satisfied
/// unconditionally. A key with no clauses matches everything.
pub fn pattern_matches(key: &PatternKey, values: &SelectorValues) -> bool {
    key.clauses().iter().all(|clause| match &clause.value {
        ClauseValue::Wildcard => true,
        ClauseValue::Literal(expected) => values
            .get(&clause.selector)
            .is_some_and(|actual| actual == expected),
    })
}
