//! Parsers for the declaration, pattern-key, and template sub-languages.
//!
//! All three parsers are total: malformed input degrades to a
//! best-effort representation (`Declaration::Unknown`, skipped clauses,
//! literal text) rather than an error, because the engine runs inside a
//! display pipeline that must keep functioning on bad data.

mod declaration;
mod pattern_key;
mod template;

pub use declaration::{parse_declaration, parse_declarations, parse_declarations_with_diagnostics};
pub use pattern_key::parse_pattern_key;
pub use template::{Segment, Template, parse_template};
