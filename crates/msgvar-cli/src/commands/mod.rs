//! CLI subcommand implementations.

mod check;
mod detect;
mod render;

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use msgvar::{extract_variant_structure, Value, VariantStructure};

pub use check::{run_check, CheckArgs};
pub use detect::{run_detect, DetectArgs};
pub use render::{run_render, RenderArgs};

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Convert CLI parameters to engine values, parsing numbers where
/// possible and falling back to strings.
fn to_params(pairs: Vec<(String, String)>) -> HashMap<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| {
            let value = if let Ok(n) = v.parse::<i64>() {
                Value::from(n)
            } else if let Ok(f) = v.parse::<f64>() {
                Value::from(f)
            } else {
                Value::from(v)
            };
            (k, value)
        })
        .collect()
}

/// Load a stored variant structure from a JSON file.
fn load_structure(path: &Path) -> miette::Result<VariantStructure> {
    let content = read_to_string(path)
        .map_err(|e| miette::miette!("cannot read {}: {}", path.display(), e))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| miette::miette!("{} is not valid JSON: {}", path.display(), e))?;
    extract_variant_structure(&value).ok_or_else(|| {
        miette::miette!(
            "{} does not contain a variant structure (expected a one-element array with a 'match' object)",
            path.display()
        )
    })
}
