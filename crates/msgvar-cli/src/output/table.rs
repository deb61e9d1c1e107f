//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use msgvar::MatchTable;

/// Format a match table as an ASCII table, marking the active entry.
///
/// Entries are listed in their stored order, which is the order the
/// matcher walks them in.
pub fn format_match_table(match_table: &MatchTable, active: Option<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Pattern key", "Template"]);

    for (key, template) in match_table {
        let marker = if active == Some(key.as_str()) { "*" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            key.as_str().to_string(),
            template.clone(),
        ]);
    }

    table
}
