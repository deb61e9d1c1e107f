//! Variant-structure extraction from stored values.
//!
//! Stored translations wrap one variant structure inside a single-element
//! array, sometimes as already-decoded JSON and sometimes as encoded
//! text. The extractor normalizes both shapes to one canonical
//! `VariantStructure`; everything else (plain string templates, absent
//! values, scalars) is reported as `None` so callers fall through to
//! straight text handling.

use serde_json::Value as JsonValue;

use crate::types::VariantStructure;

/// Extract a canonical `VariantStructure` from a stored value.
///
/// Accepts the three observed shapes:
/// 1. A one-element array whose sole element has a `match` object.
/// 2. Text whose trimmed form starts with `[{` - decoded as JSON and
///    checked as in (1). Decode failure yields `None`, not an error.
/// 3. Anything else yields `None`: the value is a simple, non-variant
///    template outside this engine's scope.
///
/// # Example
///
/// ```
/// use msgvar::extract_variant_structure;
///
/// let stored = serde_json::json!([{
///     "declarations": ["input count", "local countPlural = count: plural"],
///     "selectors": ["countPlural"],
///     "match": { "countPlural=one": "1 item", "countPlural=other": "{count} items" }
/// }]);
///
/// let structure = extract_variant_structure(&stored).unwrap();
/// assert_eq!(structure.selectors, vec!["countPlural"]);
///
/// // Plain templates are not variant structures.
/// assert!(extract_variant_structure(&serde_json::json!("Hello {name}")).is_none());
/// ```
pub fn extract_variant_structure(value: &JsonValue) -> Option<VariantStructure> {
    match value {
        JsonValue::Array(items) => from_wrapped(items),
        JsonValue::String(text) => {
            if !text.trim_start().starts_with("[{") {
                return None;
            }
            let decoded: JsonValue = serde_json::from_str(text).ok()?;
            match &decoded {
                JsonValue::Array(items) => from_wrapped(items),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Unwrap the single-element array shape and deserialize its element.
fn from_wrapped(items: &[JsonValue]) -> Option<VariantStructure> {
    let [element] = items else {
        return None;
    };
    if !element.get("match").is_some_and(JsonValue::is_object) {
        return None;
    }
    serde_json::from_value(element.clone()).ok()
}

/// Encode a variant structure in its canonical stored shape: a
/// single-element array wrapping the structure. The wrapping layer is
/// preserved purely for forward compatibility and must round-trip
/// unchanged.
pub fn to_stored(structure: &VariantStructure) -> JsonValue {
    serde_json::json!([structure])
}
