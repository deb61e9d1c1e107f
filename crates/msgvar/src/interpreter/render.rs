//! Rendering and active-variant detection.
//!
//! Both operations share the selector-evaluation and pattern-matching
//! pipeline; render substitutes parameters into the winning template
//! while detect returns the winning pattern key itself (used to
//! pre-select editing controls). Their no-match fallback policies are
//! deliberately identical - both degrade to the first match entry - so
//! what render shows and what detect reports as active never diverge.

use std::collections::HashMap;

use crate::diagnostic::{Diagnostic, suggest_keys};
use crate::interpreter::matcher::find_match;
use crate::interpreter::plural::{IcuCategorizer, PluralCategorizer};
use crate::interpreter::selector::{SelectorValues, evaluate_selectors, selector_names};
use crate::parser::{Segment, parse_template};
use crate::types::{Value, VariantStructure};

/// Render a variant structure to a concrete string.
///
/// # Example
///
/// ```
/// use msgvar::{MatchTable, VariantStructure, params, render};
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
/// assert_eq!(render(&structure, &params! { "count" => 5 }, "en"), "5 items");
/// assert_eq!(render(&structure, &params! { "count" => 1 }, "en"), "1 item");
/// ```
pub fn render(structure: &VariantStructure, params: &HashMap<String, Value>, lang: &str) -> String {
    render_with_diagnostics(structure, params, lang).0
}

/// Render, also returning the diagnostics collected along the way.
pub fn render_with_diagnostics(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
) -> (String, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let output = render_in(structure, params, lang, &IcuCategorizer, &mut diagnostics);
    (output, diagnostics)
}

/// Render with an injected plural categorizer.
///
/// An empty match table renders the empty string; an exhausted match
/// table falls back to the first entry's template. Both degradations
/// are reported through `diagnostics`, never as errors, because
/// rendering runs inside display pipelines that must not crash on
/// malformed data.
pub fn render_in(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
    categorizer: &dyn PluralCategorizer,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let Some((_, first_template)) = structure.match_table.first() else {
        diagnostics.push(Diagnostic::EmptyMatchTable);
        return String::new();
    };

    let values = evaluate_selectors(structure, params, lang, categorizer, diagnostics);
    let template = match find_match(&structure.match_table, &values) {
        Some((_, template)) => template,
        None => {
            diagnostics.push(no_match_diagnostic(structure, &values));
            first_template
        }
    };
    substitute(template, params)
}

/// Identify which pattern key is active for a parameter set.
///
/// The inverse of rendering: same pipeline, but the caller wants the
/// winning key rather than its template. Returns `None` only when the
/// match table is empty.
pub fn detect_active_key(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
) -> Option<String> {
    detect_active_key_with_diagnostics(structure, params, lang).0
}

/// Detect the active key, also returning collected diagnostics.
pub fn detect_active_key_with_diagnostics(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
) -> (Option<String>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let key = detect_active_key_in(structure, params, lang, &IcuCategorizer, &mut diagnostics);
    (key, diagnostics)
}

/// Detect the active key with an injected plural categorizer.
///
/// On no-match this falls back to the first pattern key, mirroring the
/// render fallback. The two policies must stay consistent: divergence
/// between what render shows and what detect reports as active is a
/// correctness bug for any caller comparing the two.
pub fn detect_active_key_in(
    structure: &VariantStructure,
    params: &HashMap<String, Value>,
    lang: &str,
    categorizer: &dyn PluralCategorizer,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<String> {
    let Some((first_key, _)) = structure.match_table.first() else {
        diagnostics.push(Diagnostic::EmptyMatchTable);
        return None;
    };

    let values = evaluate_selectors(structure, params, lang, categorizer, diagnostics);
    match find_match(&structure.match_table, &values) {
        Some((key, _)) => Some(key.as_str().to_string()),
        None => {
            diagnostics.push(no_match_diagnostic(structure, &values));
            Some(first_key.as_str().to_string())
        }
    }
}

/// Substitute `{identifier}` placeholders into a template.
///
/// Single pass; a placeholder with no corresponding parameter survives
/// literally in the output. That is intentional: an unresolved
/// placeholder stays visible rather than vanishing.
pub fn substitute(template: &str, params: &HashMap<String, Value>) -> String {
    let parsed = parse_template(template);
    let mut output = String::with_capacity(template.len());
    for segment in &parsed.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => match params.get(name) {
                Some(value) => output.push_str(&value.to_string()),
                None => {
                    output.push('{');
                    output.push_str(name);
                    output.push('}');
                }
            },
        }
    }
    output
}

/// Build the no-match diagnostic, reconstructing the key the selector
/// values would have matched and suggesting the closest real keys.
fn no_match_diagnostic(structure: &VariantStructure, values: &SelectorValues) -> Diagnostic {
    let sought = selector_names(structure)
        .iter()
        .map(|name| {
            let value = values.get(name).map_or("", String::as_str);
            format!("{name}={value}")
        })
        .collect::<Vec<_>>()
        .join(", ");
    let available: Vec<String> = structure
        .match_table
        .iter()
        .map(|(key, _)| key.as_str().to_string())
        .collect();
    let suggestions = suggest_keys(&sought, &available);
    Diagnostic::NoMatch {
        sought,
        suggestions,
    }
}
