use std::fmt::{Formatter, Result as FmtResult};

use bon::Builder;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::{Declaration, PatternKey};
use crate::parser::parse_declaration;

/// One pluralized or conditionally-selected message.
///
/// A variant structure is the unit of work for the engine: declarations
/// describe where selector values come from, `selectors` names the values
/// used for matching (inferred from the match table when empty), and the
/// match table pairs pattern keys with templates in producer-given order.
///
/// Variant structures are pure data. The engine constructs nothing across
/// calls and holds no state between invocations.
///
/// # Example
///
/// ```
/// use msgvar::{MatchTable, VariantStructure};
///
/// let structure = VariantStructure::builder()
///     .declarations(vec![
///         "input count".into(),
///         "local countPlural = count: plural".into(),
///     ])
///     .selectors(vec!["countPlural".to_string()])
///     .match_table(
///         [("countPlural=one", "1 item"), ("countPlural=other", "{count} items")]
///             .into_iter()
///             .collect::<MatchTable>(),
///     )
///     .build();
///
/// assert_eq!(structure.match_table.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Builder, Serialize, Deserialize)]
pub struct VariantStructure {
    /// Declarations in their given order.
    #[builder(default)]
    #[serde(default, deserialize_with = "lenient_declarations")]
    pub declarations: Vec<Declaration>,

    /// Explicit selector names. May be empty, in which case selectors
    /// are inferred from the match table's pattern keys.
    #[builder(default)]
    #[serde(default)]
    pub selectors: Vec<String>,

    /// The ordered match table. Order is semantically load-bearing:
    /// matching is first-match-wins.
    #[builder(default)]
    #[serde(rename = "match")]
    pub match_table: MatchTable,
}

/// Deserialize declarations leniently: non-string entries are silently
/// dropped, and each string parses totally (malformed text becomes
/// `Declaration::Unknown`).
fn lenient_declarations<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Declaration>, D::Error> {
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(entries
        .iter()
        .filter_map(serde_json::Value::as_str)
        .map(parse_declaration)
        .collect())
}

/// An ordered sequence of `(PatternKey, Template)` pairs.
///
/// Never a hash map: the matcher walks entries in their given order and
/// returns the first satisfied one, so producer-given order must survive
/// construction and serialization round-trips. Serializes as a map whose
/// key order is the pair order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchTable(Vec<(PatternKey, String)>);

impl MatchTable {
    /// Create a match table from ordered entries.
    pub fn new(entries: Vec<(PatternKey, String)>) -> Self {
        Self(entries)
    }

    /// Get the entries in their given order.
    pub fn entries(&self) -> &[(PatternKey, String)] {
        &self.0
    }

    /// Get the first entry, used as the no-match fallback.
    pub fn first(&self) -> Option<&(PatternKey, String)> {
        self.0.first()
    }

    /// Iterate entries in their given order.
    pub fn iter(&self) -> std::slice::Iter<'_, (PatternKey, String)> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<PatternKey>, V: Into<String>> FromIterator<(K, V)> for MatchTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a MatchTable {
    type Item = &'a (PatternKey, String);
    type IntoIter = std::slice::Iter<'a, (PatternKey, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for MatchTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, template) in &self.0 {
            map.serialize_entry(key.as_str(), template)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MatchTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = MatchTable;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
                formatter.write_str("an ordered map of pattern keys to templates")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<PatternKey, String>()? {
                    entries.push(entry);
                }
                Ok(MatchTable(entries))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
