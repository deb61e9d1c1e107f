//! Output formatting helpers.

mod table;

pub use table::format_match_table;
