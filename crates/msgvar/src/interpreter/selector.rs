//! Selector-name inference and selector evaluation.
//!
//! The selector evaluator computes the current value of every selector
//! for a given parameter set and locale: a plural category for `local
//! ... : plural` declarations, otherwise a verbatim parameter lookup.
//! It is a pure function with no observable side effects other than the
//! diagnostics it collects.

use std::collections::HashMap;

use crate::Diagnostic;
use crate::interpreter::plural::{PluralCategorizer, PluralKind};
use crate::types::{Declaration, MatchTable, Value, VariantStructure};

/// Selector name to currently-observed value, produced once per
/// evaluation.
pub type SelectorValues = HashMap<String, String>;

/// Derive the selector list from pattern keys.
///
/// Collects the distinct selector names in first-seen order across all
/// pattern keys. First-occurrence order makes inference deterministic
/// for a given match table.
pub fn infer_selector_names(table: &MatchTable) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for (key, _) in table {
        for clause in key.clauses() {
            if !names.iter().any(|name| *name == clause.selector) {
                names.push(clause.selector.clone());
            }
        }
    }
    names
}

/// The effective selector list: the explicit `selectors` field, or the
/// inferred list when it is empty.
pub fn selector_names(structure: &VariantStructure) -> Vec<String> {
    if structure.selectors.is_empty() {
        infer_selector_names(&structure.match_table)
    } else {
        structure.selectors.clone()
    }
}

/// Compute the current value of every selector.
pub fn evaluate_selectors(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
    categorizer: &dyn PluralCategorizer,
    diagnostics: &mut Vec<Diagnostic>,
) -> SelectorValues {
    let names = selector_names(structure);
    let mut values = SelectorValues::with_capacity(names.len());
    for name in names {
        let value = evaluate_selector(&name, structure, params, lang, categorizer, diagnostics);
        values.insert(name, value);
    }
    values
}

/// Evaluate a single selector by looking up its declaration.
///
/// With no declaration, or an `Unknown` one, the value falls back to
/// the parameter with the selector's own name.
fn evaluate_selector(
    name: &str,
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
    categorizer: &dyn PluralCategorizer,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let declaration = structure
        .declarations
        .iter()
        .find(|decl| decl.name() == Some(name));

    match declaration {
        Some(Declaration::Local {
            source,
            transform,
            options,
            ..
        }) if transform == "plural" => {
            let kind = if options.get("type").is_some_and(|t| t == "ordinal") {
                PluralKind::Ordinal
            } else {
                PluralKind::Cardinal
            };
            match params.get(source).and_then(Value::as_plural_count) {
                Some(n) => categorizer.category(lang, n, kind).to_string(),
                None => {
                    // Missing or non-numeric source: defined fallback is "other".
                    diagnostics.push(Diagnostic::NonNumericPluralSource {
                        selector: name.to_string(),
                        source: source.clone(),
                    });
                    "other".to_string()
                }
            }
        }
        Some(Declaration::Local {
            source, transform, ..
        }) => {
            diagnostics.push(Diagnostic::UnsupportedTransform {
                selector: name.to_string(),
                source: source.clone(),
                transform: transform.clone(),
            });
            param_value(params, source, diagnostics)
        }
        Some(Declaration::Input { name: param }) => param_value(params, param, diagnostics),
        Some(Declaration::Unknown { .. }) | None => param_value(params, name, diagnostics),
    }
}

/// Look up a parameter verbatim, stringified. Missing parameters
/// degrade to the empty string with a diagnostic.
fn param_value(
    params: &HashMap<String, Value>,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    match params.get(name) {
        Some(value) => value.to_string(),
        None => {
            diagnostics.push(Diagnostic::MissingParameter {
                name: name.to_string(),
            });
            String::new()
        }
    }
}
