//! Implementation of the `msgvar check` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_structure;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (stored variant structure JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for check results.
#[derive(Serialize)]
struct CheckReport {
    file: String,
    diagnostics: Vec<String>,
}

/// Run the check command. Exits 0 when every file is clean, 1 otherwise.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::new();
    let mut total = 0usize;

    for file in &args.files {
        let structure = load_structure(file)?;
        let diagnostics = msgvar::lint_structure(&structure);
        total += diagnostics.len();
        reports.push(CheckReport {
            file: file.display().to_string(),
            diagnostics: diagnostics.iter().map(ToString::to_string).collect(),
        });
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("JSON serialization should not fail")
        );
    } else {
        for report in &reports {
            if report.diagnostics.is_empty() {
                println!("{} {}", "ok".green(), report.file);
            } else {
                println!("{} {}", "warn".yellow(), report.file);
                for diagnostic in &report.diagnostics {
                    println!("  {}", diagnostic);
                }
            }
        }
        if total == 0 {
            println!("check passed: no warnings found");
        } else {
            println!("check found {} warning(s)", total);
        }
    }

    if total == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(1)
    }
}
