//! Static lint rules for variant structures.
//!
//! Analyzes a structure without evaluating it, reporting malformed
//! declarations, empty match tables, undeclared selectors, and match
//! entries made unreachable by an earlier unconditional entry.

use crate::Diagnostic;
use crate::interpreter::selector::selector_names;
use crate::types::{ClauseValue, Declaration, VariantStructure};

/// Run all static lint rules over a variant structure.
///
/// Returns the same `Diagnostic` values evaluation would emit where the
/// two overlap, so tooling can report problems before any parameters
/// exist to evaluate against.
pub fn lint_structure(structure: &VariantStructure) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    lint_malformed_declarations(structure, &mut diagnostics);
    lint_empty_match(structure, &mut diagnostics);
    lint_undeclared_selectors(structure, &mut diagnostics);
    lint_unreachable_entries(structure, &mut diagnostics);
    diagnostics
}

/// Report every declaration that matched neither grammar.
fn lint_malformed_declarations(structure: &VariantStructure, diagnostics: &mut Vec<Diagnostic>) {
    for declaration in &structure.declarations {
        if let Declaration::Unknown { raw } = declaration {
            diagnostics.push(Diagnostic::MalformedDeclaration { raw: raw.clone() });
        }
    }
}

/// An empty match table renders the empty string unconditionally.
fn lint_empty_match(structure: &VariantStructure, diagnostics: &mut Vec<Diagnostic>) {
    if structure.match_table.is_empty() {
        diagnostics.push(Diagnostic::EmptyMatchTable);
    }
}

/// Selectors without a declaration fall back to a parameter lookup by
/// their own name. Legal, but usually an oversight in the producer.
fn lint_undeclared_selectors(structure: &VariantStructure, diagnostics: &mut Vec<Diagnostic>) {
    for name in selector_names(structure) {
        let declared = structure
            .declarations
            .iter()
            .any(|decl| decl.name() == Some(name.as_str()));
        if !declared {
            diagnostics.push(Diagnostic::UndeclaredSelector { name });
        }
    }
}

/// Under first-match-wins, an entry whose clauses are all wildcards (or
/// absent) matches unconditionally; anything after it can never win.
fn lint_unreachable_entries(structure: &VariantStructure, diagnostics: &mut Vec<Diagnostic>) {
    let entries = structure.match_table.entries();
    for (index, (key, _)) in entries.iter().enumerate() {
        let unconditional = key
            .clauses()
            .iter()
            .all(|clause| clause.value == ClauseValue::Wildcard);
        if unconditional && index + 1 < entries.len() {
            diagnostics.push(Diagnostic::UnreachableEntries {
                key: key.as_str().to_string(),
            });
            break;
        }
    }
}
