//! Implementation of the `msgvar render` command.

use std::path::PathBuf;

use serde::Serialize;

use super::{load_structure, parse_key_val, to_params};

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// JSON file containing the stored variant structure
    pub file: PathBuf,

    /// Language code for plural rules (e.g., en, de, ru)
    #[arg(long, required = true)]
    pub lang: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
    pub diagnostics: Vec<String>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs, verbose: bool) -> miette::Result<i32> {
    let structure = load_structure(&args.file)?;
    let params = to_params(args.params);

    let (result, diagnostics) = msgvar::render_with_diagnostics(&structure, &params, &args.lang);

    if args.json {
        let output = RenderResult {
            result,
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
        if verbose {
            for diagnostic in &diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
        }
    }

    Ok(exitcode::OK)
}
