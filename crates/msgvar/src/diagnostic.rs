//! Non-fatal diagnostic signals.
//!
//! The engine never fails on malformed data; it degrades and reports
//! what happened through these values. Callers may log them, surface
//! them in tooling, or ignore them.

use core::fmt;

/// A diagnostic emitted while parsing or evaluating a variant structure.
///
/// Diagnostics describe degradations, not failures: every operation
/// that emits one still produced a usable result.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Declaration text matched neither known grammar; evaluation falls
    /// back to a raw parameter lookup by the selector's own name.
    MalformedDeclaration { raw: String },

    /// A verbatim parameter lookup found nothing; the selector's value
    /// defaults to the empty string.
    MissingParameter { name: String },

    /// A plural transform's source was missing or non-numeric; the
    /// category defaults to "other".
    NonNumericPluralSource { selector: String, source: String },

    /// A local declaration used a transform other than "plural"; the
    /// source parameter's raw value is used instead.
    UnsupportedTransform {
        selector: String,
        source: String,
        transform: String,
    },

    /// No match entry was satisfied; the first entry was used as a
    /// best-effort fallback.
    NoMatch {
        /// The key the selector values would have matched.
        sought: String,
        /// Pattern keys closest to `sought`, for tooling.
        suggestions: Vec<String>,
    },

    /// A selector has no declaration; its value falls back to the
    /// parameter of the same name.
    UndeclaredSelector { name: String },

    /// The match table has no entries; render produces an empty string
    /// and detect reports no active key.
    EmptyMatchTable,

    /// A non-final all-wildcard entry makes every later entry
    /// unreachable under first-match-wins.
    UnreachableEntries { key: String },
}

// Hand-written instead of `thiserror::Error` because the derive treats
// any field named `source` as an error cause, and these `source` fields
// are plain strings naming a source parameter.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedDeclaration { raw } => {
                write!(f, "declaration matched no known form: '{raw}'")
            }
            Self::MissingParameter { name } => {
                write!(f, "parameter '{name}' is missing; selector value defaults to empty")
            }
            Self::NonNumericPluralSource { selector, source } => {
                write!(
                    f,
                    "plural source '{source}' for selector '{selector}' is not numeric; using 'other'"
                )
            }
            Self::UnsupportedTransform {
                selector,
                source,
                transform,
            } => {
                write!(
                    f,
                    "transform '{transform}' on selector '{selector}' is not supported; using raw value of '{source}'"
                )
            }
            Self::NoMatch { sought, .. } => {
                write!(f, "no match entry satisfied '{sought}'; falling back to the first entry")
            }
            Self::UndeclaredSelector { name } => {
                write!(
                    f,
                    "selector '{name}' has no declaration; values fall back to the parameter of the same name"
                )
            }
            Self::EmptyMatchTable => {
                write!(f, "variant structure has no match entries")
            }
            Self::UnreachableEntries { key } => {
                write!(
                    f,
                    "match entry '{key}' matches unconditionally; later entries are unreachable"
                )
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

/// Compute fuzzy-match suggestions for a pattern key that matched
/// nothing, sorted by similarity.
///
/// Uses normalized Levenshtein distance with a 0.5 threshold and caps
/// results at three entries.
pub fn suggest_keys(sought: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = available
        .iter()
        .map(|key| (strsim::normalized_levenshtein(sought, key), key))
        .filter(|(score, _)| *score > 0.5)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(3)
        .map(|(_, key)| key.clone())
        .collect()
}
