//! Tests for variant-structure extraction and serialization round-trips.

use msgvar::{extract_variant_structure, to_stored, Declaration, MatchTable, VariantStructure};
use serde_json::json;

// =============================================================================
// Shape 1: already-decoded single-element array
// =============================================================================

#[test]
fn extract_from_decoded_array() {
    let stored = json!([{
        "declarations": ["input count", "local countPlural = count: plural"],
        "selectors": ["countPlural"],
        "match": {
            "countPlural=one": "1 item",
            "countPlural=other": "{count} items"
        }
    }]);

    let structure = extract_variant_structure(&stored).unwrap();
    assert_eq!(structure.declarations.len(), 2);
    assert_eq!(structure.selectors, vec!["countPlural"]);
    assert_eq!(structure.match_table.len(), 2);
    assert_eq!(
        structure.match_table.entries()[0].0.as_str(),
        "countPlural=one"
    );
}

#[test]
fn declarations_and_selectors_are_optional() {
    let stored = json!([{ "match": { "x=1": "one" } }]);
    let structure = extract_variant_structure(&stored).unwrap();
    assert!(structure.declarations.is_empty());
    assert!(structure.selectors.is_empty());
}

#[test]
fn non_string_declaration_entries_are_dropped() {
    let stored = json!([{
        "declarations": ["input count", 42, null, ["nested"]],
        "match": { "x=1": "one" }
    }]);
    let structure = extract_variant_structure(&stored).unwrap();
    assert_eq!(structure.declarations.len(), 1);
    assert_eq!(structure.declarations[0].name(), Some("count"));
}

#[test]
fn malformed_declarations_survive_as_unknown() {
    let stored = json!([{
        "declarations": ["not a declaration"],
        "match": { "x=1": "one" }
    }]);
    let structure = extract_variant_structure(&stored).unwrap();
    assert!(matches!(
        structure.declarations[0],
        Declaration::Unknown { .. }
    ));
}

#[test]
fn match_pair_order_is_preserved() {
    // Deliberately non-alphabetical key order: first-match-wins depends
    // on producer-given order surviving extraction.
    let stored = json!([{
        "match": {
            "z=1": "first",
            "a=2": "second",
            "m=3": "third"
        }
    }]);
    let structure = extract_variant_structure(&stored).unwrap();
    let keys: Vec<&str> = structure
        .match_table
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["z=1", "a=2", "m=3"]);
}

// =============================================================================
// Shape 2: encoded text
// =============================================================================

#[test]
fn extract_from_encoded_text() {
    let text = r#"[{"selectors":["n"],"match":{"n=one":"1","n=*":"many"}}]"#;
    let structure = extract_variant_structure(&json!(text)).unwrap();
    assert_eq!(structure.selectors, vec!["n"]);
    assert_eq!(structure.match_table.len(), 2);
}

#[test]
fn leading_whitespace_in_encoded_text_is_tolerated() {
    let text = "  \n[{\"match\":{\"n=*\":\"x\"}}]";
    assert!(extract_variant_structure(&json!(text)).is_some());
}

#[test]
fn undecodable_text_yields_none() {
    assert!(extract_variant_structure(&json!("[{ not json")).is_none());
    assert!(extract_variant_structure(&json!("[{\"match\": 5}]")).is_none());
}

// =============================================================================
// Shape 3: everything else
// =============================================================================

#[test]
fn plain_templates_and_scalars_yield_none() {
    assert!(extract_variant_structure(&json!("Hello {name}")).is_none());
    assert!(extract_variant_structure(&json!(42)).is_none());
    assert!(extract_variant_structure(&json!(null)).is_none());
    assert!(extract_variant_structure(&json!({ "match": {} })).is_none());
}

#[test]
fn wrong_arity_arrays_yield_none() {
    assert!(extract_variant_structure(&json!([])).is_none());
    assert!(
        extract_variant_structure(&json!([{ "match": {} }, { "match": {} }])).is_none()
    );
}

#[test]
fn element_without_match_yields_none() {
    assert!(extract_variant_structure(&json!([{ "selectors": ["n"] }])).is_none());
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn stored_shape_round_trips_structurally() {
    let structure = VariantStructure::builder()
        .declarations(vec![
            "input count".into(),
            "local countPlural = count: plural".into(),
            "local ord = pos: plural type=ordinal".into(),
            "some malformed text".into(),
        ])
        .selectors(vec!["countPlural".to_string()])
        .match_table(
            [
                ("countPlural=one", "1 item"),
                ("countPlural=other, platform=*", "{count} items"),
                ("*", "fallback"),
            ]
            .into_iter()
            .collect::<MatchTable>(),
        )
        .build();

    let stored = to_stored(&structure);
    // The single-element wrapping layer is part of the canonical shape.
    assert!(stored.as_array().is_some_and(|a| a.len() == 1));
    assert_eq!(extract_variant_structure(&stored), Some(structure));
}

#[test]
fn round_trip_through_encoded_text() {
    let structure = VariantStructure::builder()
        .match_table(
            [("z=1", "first"), ("a=2", "second")]
                .into_iter()
                .collect::<MatchTable>(),
        )
        .build();

    let text = serde_json::to_string(&to_stored(&structure)).unwrap();
    assert_eq!(extract_variant_structure(&json!(text)), Some(structure));
}
