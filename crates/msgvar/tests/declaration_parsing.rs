//! Integration tests for declaration parsing.

use msgvar::{parse_declaration, parse_declarations, Declaration, Diagnostic};
use msgvar::parser::parse_declarations_with_diagnostics;

// =============================================================================
// Recognized forms
// =============================================================================

#[test]
fn parse_input_declaration() {
    let decl = parse_declaration("input count");
    assert_eq!(
        decl,
        Declaration::Input {
            name: "count".to_string()
        }
    );
    assert_eq!(decl.name(), Some("count"));
}

#[test]
fn parse_local_plural_declaration() {
    let decl = parse_declaration("local countPlural = count: plural");
    let Declaration::Local {
        name,
        source,
        transform,
        options,
    } = decl
    else {
        panic!("expected Local declaration");
    };
    assert_eq!(name, "countPlural");
    assert_eq!(source, "count");
    assert_eq!(transform, "plural");
    assert!(options.is_empty());
}

#[test]
fn parse_local_with_options() {
    let decl = parse_declaration("local ordinal = position: plural type=ordinal");
    let Declaration::Local { options, .. } = decl else {
        panic!("expected Local declaration");
    };
    assert_eq!(options.len(), 1);
    assert_eq!(options.get("type").map(String::as_str), Some("ordinal"));
}

#[test]
fn option_tokens_without_equals_are_ignored() {
    let decl = parse_declaration("local x = y: plural type=ordinal flag");
    let Declaration::Local { options, .. } = decl else {
        panic!("expected Local declaration");
    };
    assert_eq!(options.len(), 1);
    assert!(options.contains_key("type"));
}

#[test]
fn whitespace_around_punctuation_is_tolerated() {
    let decl = parse_declaration("local a=b: plural");
    assert_eq!(decl.name(), Some("a"));

    let decl = parse_declaration("  input count  ");
    assert_eq!(decl.name(), Some("count"));
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn malformed_declaration_becomes_unknown() {
    // Missing `=` and `:` in the local form.
    let decl = parse_declaration("local countPlural count plural");
    assert_eq!(
        decl,
        Declaration::Unknown {
            raw: "local countPlural count plural".to_string()
        }
    );
    assert_eq!(decl.name(), None);
}

#[test]
fn local_missing_colon_becomes_unknown() {
    let decl = parse_declaration("local countPlural = count plural");
    assert!(matches!(decl, Declaration::Unknown { .. }));
}

#[test]
fn input_with_trailing_text_becomes_unknown() {
    let decl = parse_declaration("input count extra");
    assert!(matches!(decl, Declaration::Unknown { .. }));
}

#[test]
fn bare_keyword_becomes_unknown() {
    assert!(matches!(
        parse_declaration("input"),
        Declaration::Unknown { .. }
    ));
    assert!(matches!(
        parse_declaration("local"),
        Declaration::Unknown { .. }
    ));
}

#[test]
fn unknown_preserves_original_text_verbatim() {
    let raw = "  definitely not a declaration  ";
    let Declaration::Unknown { raw: preserved } = parse_declaration(raw) else {
        panic!("expected Unknown declaration");
    };
    assert_eq!(preserved, raw);
}

// =============================================================================
// Sequences and diagnostics
// =============================================================================

#[test]
fn parse_declarations_preserves_order() {
    let raw = [
        "input count".to_string(),
        "local countPlural = count: plural".to_string(),
    ];
    let decls = parse_declarations(&raw);
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].name(), Some("count"));
    assert_eq!(decls[1].name(), Some("countPlural"));
}

#[test]
fn malformed_strings_produce_diagnostics_not_errors() {
    let raw = ["input count".to_string(), "garbage here".to_string()];
    let (decls, diagnostics) = parse_declarations_with_diagnostics(&raw);
    assert_eq!(decls.len(), 2);
    assert_eq!(
        diagnostics,
        vec![Diagnostic::MalformedDeclaration {
            raw: "garbage here".to_string()
        }]
    );
}

// =============================================================================
// Display round-trip
// =============================================================================

#[test]
fn display_round_trips_through_parse() {
    let cases = [
        "input count",
        "local countPlural = count: plural",
        "local ordinal = position: plural type=ordinal",
        "total gibberish",
    ];
    for case in cases {
        let decl = parse_declaration(case);
        assert_eq!(parse_declaration(&decl.to_string()), decl, "case: {case}");
    }
}
