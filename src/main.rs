//! nf-list - List Nerd Font glyphs from the command line
//!
//! nf-list provides:
//! - A cached copy of the Nerd Fonts generated stylesheet
//! - Glyph extraction (name, codepoint, character)
//! - Keyword/group filtering and random selection
//! - Plain, compact and JSON output, plus fzf shell integration

use anyhow::Result;
use clap::Parser;

mod backends;
mod cache;
mod cli;
mod config;
mod core;
mod shell;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    cli::run(cli)
}

/// Route `log` records to stderr. RUST_LOG takes precedence over --verbose.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
