pub mod diagnostic;
pub mod extract;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use diagnostic::{Diagnostic, suggest_keys};
pub use extract::{extract_variant_structure, to_stored};
pub use interpreter::{
    IcuCategorizer, PluralCategorizer, PluralKind, detect_active_key,
    detect_active_key_with_diagnostics, lint_structure, plural_category, render,
    render_with_diagnostics,
};
pub use parser::{parse_declaration, parse_declarations, parse_pattern_key};
pub use types::{Clause, ClauseValue, Declaration, MatchTable, PatternKey, Value, VariantStructure};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use msgvar::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
