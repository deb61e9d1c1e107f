//! msgvar CLI entry point.
//!
//! Provides command-line tools for working with stored message variant
//! structures:
//! - `msgvar render` - Render a variant structure with parameters
//! - `msgvar detect` - Show which pattern key is active
//! - `msgvar check` - Lint stored structures

mod commands;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_detect, run_render, CheckArgs, DetectArgs, RenderArgs};

/// Message variant structure tools.
#[derive(Debug, Parser)]
#[command(name = "msgvar")]
#[command(about = "Message variant structure tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output (print diagnostics to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a stored variant structure with parameters
    Render(RenderArgs),
    /// Show which pattern key is active for a parameter set
    Detect(DetectArgs),
    /// Lint stored variant structures
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let verbose = cli.verbose;
    let result = match cli.command {
        Commands::Render(args) => run_render(args, verbose),
        Commands::Detect(args) => run_detect(args, verbose),
        Commands::Check(args) => run_check(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
