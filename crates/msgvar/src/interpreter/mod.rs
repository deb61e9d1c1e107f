//! The variant resolution pipeline.
//!
//! Evaluation flows `VariantStructure + Params + Locale -> selector
//! values -> first satisfied match entry -> substituted template` (or
//! the winning pattern key itself, for active-variant detection). Every
//! operation is a pure function of its inputs; the engine holds no
//! state between invocations.

mod lint;
mod matcher;
mod plural;
mod render;
mod selector;

pub use lint::lint_structure;
pub use matcher::{find_match, pattern_matches};
pub use plural::{IcuCategorizer, PluralCategorizer, PluralKind, plural_category};
pub use render::{
    detect_active_key, detect_active_key_in, detect_active_key_with_diagnostics, render,
    render_in, render_with_diagnostics, substitute,
};
pub use selector::{SelectorValues, evaluate_selectors, infer_selector_names, selector_names};
