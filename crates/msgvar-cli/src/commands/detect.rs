//! Implementation of the `msgvar detect` command.

use std::path::PathBuf;

use serde::Serialize;

use super::{load_structure, parse_key_val, to_params};
use crate::output::format_match_table;

/// Arguments for the detect command.
#[derive(Debug, clap::Args)]
pub struct DetectArgs {
    /// JSON file containing the stored variant structure
    pub file: PathBuf,

    /// Language code for plural rules (e.g., en, de, ru)
    #[arg(long, required = true)]
    pub lang: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Print the full match table with the active entry marked
    #[arg(long)]
    pub table: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for detect results.
#[derive(Serialize)]
pub struct DetectResult {
    pub active_key: Option<String>,
    pub diagnostics: Vec<String>,
}

/// Run the detect command.
pub fn run_detect(args: DetectArgs, verbose: bool) -> miette::Result<i32> {
    let structure = load_structure(&args.file)?;
    let params = to_params(args.params);

    let (active_key, diagnostics) =
        msgvar::detect_active_key_with_diagnostics(&structure, &params, &args.lang);

    if args.json {
        let output = DetectResult {
            active_key: active_key.clone(),
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else if args.table {
        println!(
            "{}",
            format_match_table(&structure.match_table, active_key.as_deref())
        );
    } else {
        match &active_key {
            Some(key) => println!("{}", key),
            None => eprintln!("no active key: structure has no match entries"),
        }
    }

    if verbose && !args.json {
        for diagnostic in &diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
    }

    match active_key {
        Some(_) => Ok(exitcode::OK),
        None => Ok(exitcode::DATAERR),
    }
}
