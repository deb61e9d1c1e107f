//! Core data model for the variant resolution engine.

mod declaration;
mod pattern_key;
mod value;
mod variant_structure;

pub use declaration::Declaration;
pub use pattern_key::{Clause, ClauseValue, PatternKey};
pub use value::Value;
pub use variant_structure::{MatchTable, VariantStructure};
