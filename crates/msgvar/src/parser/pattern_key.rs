//! Pattern-key parser.
//!
//! A pattern key is a comma-separated list of `selector=value` clauses,
//! where `*` is the unconditional wildcard. The parse is total: empty
//! clauses and clauses without `=` are skipped, so a degenerate key like
//! `"*"` parses to zero clauses and matches everything.

use crate::types::{Clause, ClauseValue, PatternKey};

/// Parse a pattern-key string into its ordered clauses. Total: never
/// fails, and the original key text is preserved for round-trips.
pub fn parse_pattern_key(raw: &str) -> PatternKey {
    let clauses = raw
        .split(',')
        .filter_map(parse_clause)
        .collect();
    PatternKey::from_parts(raw, clauses)
}

/// Parse one clause, returning `None` for text that is empty or has no
/// `=` separator.
fn parse_clause(part: &str) -> Option<Clause> {
    let part = part.trim();
    let (selector, value) = part.split_once('=')?;
    let selector = selector.trim();
    if selector.is_empty() {
        return None;
    }
    let value = match value.trim() {
        "*" => ClauseValue::Wildcard,
        literal => ClauseValue::Literal(literal.to_string()),
    };
    Some(Clause {
        selector: selector.to_string(),
        value,
    })
}
