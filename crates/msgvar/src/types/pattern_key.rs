use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::parser::parse_pattern_key;

/// A key identifying one entry of a match table.
///
/// Pattern keys are stored as condition strings of the form
/// `"sel1=val1, sel2=val2"`. Each clause compares a selector's current
/// value against a literal, or is satisfied unconditionally when its
/// value is the `*` wildcard. The original key text is preserved so
/// keys round-trip through serialization unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternKey {
    raw: String,
    clauses: Vec<Clause>,
}

/// A single `selector=value` condition within a pattern key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Selector name the clause constrains.
    pub selector: String,
    /// Expected value, literal or wildcard.
    pub value: ClauseValue,
}

/// The expected value of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseValue {
    /// Satisfied when the selector's value equals this string exactly.
    Literal(String),
    /// Satisfied unconditionally (`*`).
    Wildcard,
}

impl PatternKey {
    pub(crate) fn from_parts(raw: impl Into<String>, clauses: Vec<Clause>) -> Self {
        Self {
            raw: raw.into(),
            clauses,
        }
    }

    /// Get the original key text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed clauses in their given order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

impl std::ops::Deref for PatternKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl From<&str> for PatternKey {
    fn from(s: &str) -> Self {
        parse_pattern_key(s)
    }
}

impl From<String> for PatternKey {
    fn from(s: String) -> Self {
        parse_pattern_key(&s)
    }
}

impl std::fmt::Display for PatternKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for PatternKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PatternKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_pattern_key(&raw))
    }
}
