//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::backends::fetch::fetch_stylesheet;
use crate::backends::http::HttpSource;
use crate::config::{
    default_cache_base, ttl_from_hours, CacheConfig, Config, OutputMode, DEFAULT_TTL_HOURS,
    DEFAULT_URL,
};
use crate::core::filter::select;
use crate::core::model::GlyphRecord;
use crate::core::parse::parse_glyphs;
use crate::core::render::Renderer;
use crate::core::util::random_seed;

/// nf-list - list Nerd Font glyphs.
#[derive(Parser, Debug)]
#[command(name = "nf-list")]
#[command(
    author,
    version,
    about = "List Nerd Font glyphs",
    long_about = r#"nf-list downloads the Nerd Fonts generated stylesheet, caches it for a day,
and prints every glyph it defines.

Output formats:
- plain (default): <class> -> <hex> | <char>
- compact: the character only
- json: a single JSON array of {"class", "hex", "char"} objects

Examples:
    nf-list --search github
    nf-list --group dev --group md
    nf-list --random --compact
    nf-list --init fish | source
"#
)]
pub struct Cli {
    /// Filter icons by substring (repeatable; all must match).
    #[arg(
        long,
        value_name = "SUBSTR",
        long_help = "Filter icons by substring. Repeat the flag to require several keywords.\n\n\
Each keyword must appear in the class name or in the hex codepoint."
    )]
    pub search: Vec<String>,

    /// Filter icons by group prefix (repeatable; any may match).
    #[arg(
        long,
        value_name = "PREFIX",
        long_help = "Filter icons by group prefix (cod, custom, dev, extra, fa, fae, iec, indent,\n\
indentation, linux, md, oct, pl, ple, pom, seti, weather).\n\n\
A glyph matches when its class starts with nf-<PREFIX>-. Repeat the flag to\n\
accept several groups. Applied after --search."
    )]
    pub group: Vec<String>,

    /// Output one random icon.
    #[arg(
        long,
        long_help = "Output one icon chosen at random from the full set. --search and --group\n\
are ignored in this mode."
    )]
    pub random: bool,

    /// Only print the icon character.
    #[arg(long)]
    pub compact: bool,

    /// Output as JSON.
    #[arg(long, long_help = "Output a JSON array. Takes precedence over --compact.")]
    pub json: bool,

    /// Print shell integration with fzf for [fish|bash|zsh].
    #[arg(
        long,
        value_name = "SHELL",
        long_help = "Print an `nfzf` shell function that pipes nf-list into fzf with a glyph\n\
preview. Supported shells: fish, bash, zsh.\n\n\
Example: nf-list --init bash >> ~/.bashrc"
    )]
    pub init: Option<String>,

    /// Ignore the cache and download the stylesheet again.
    #[arg(long)]
    pub refresh: bool,

    /// Base cache directory.
    #[arg(
        long,
        env = "NF_LIST_CACHE_DIR",
        value_name = "DIR",
        long_help = "Base cache directory. The stylesheet is stored at\n\
<DIR>/nf-list/nerd-fonts-generated.css.\n\n\
Defaults to ~/.cache (or ./.cache when the home directory is unknown)."
    )]
    pub cache_dir: Option<PathBuf>,

    /// Cache time-to-live in hours.
    #[arg(
        long,
        env = "NF_LIST_CACHE_TTL_HOURS",
        value_name = "HOURS",
        default_value_t = DEFAULT_TTL_HOURS
    )]
    pub cache_ttl_hours: u64,

    /// Stylesheet URL.
    #[arg(long, env = "NF_LIST_URL", value_name = "URL", default_value = DEFAULT_URL, hide_default_value = true)]
    pub url: String,

    /// Fail when the server answers with a non-2xx status.
    #[arg(
        long,
        long_help = "Fail when the stylesheet server answers with a non-2xx status.\n\n\
By default any response body is used and cached, whatever its status."
    )]
    pub fail_on_http_error: bool,

    /// Report glyph definitions with undecodable codepoints on stderr.
    #[arg(long)]
    pub report_invalid: bool,

    /// Verbose mode (cache and fetch diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the runtime configuration
    pub fn to_config(&self) -> Config {
        Config {
            search: self.search.clone(),
            groups: self.group.clone(),
            random: self.random,
            mode: OutputMode::from_flags(self.compact, self.json),
            init_shell: self.init.clone(),
            report_invalid: self.report_invalid,
            cache: CacheConfig {
                base_dir: self.cache_dir.clone().unwrap_or_else(default_cache_base),
                ttl: ttl_from_hours(self.cache_ttl_hours),
                url: self.url.clone(),
                refresh: self.refresh,
                fail_on_http_error: self.fail_on_http_error,
            },
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();

    if let Some(shell) = &config.init_shell {
        crate::shell::run_init(shell);
        return Ok(());
    }

    let records = load_glyphs(&config)?;
    let selected = select(records, &config, random_seed());
    log::debug!("{} glyphs selected", selected.len());

    Renderer::new(config.mode)
        .render_to(&selected, io::stdout().lock())
        .context("Failed to write output")
}

/// Fetch and parse the stylesheet
fn load_glyphs(config: &Config) -> Result<Vec<GlyphRecord>> {
    let source = HttpSource::new(config.cache.fail_on_http_error);
    let css = fetch_stylesheet(&config.cache, &source).context("Failed to load glyphs")?;

    let outcome = parse_glyphs(&css);
    log::debug!(
        "parsed {} glyphs ({} undecodable)",
        outcome.records.len(),
        outcome.rejected.len()
    );

    if config.report_invalid {
        for bad in &outcome.rejected {
            eprintln!(
                "Invalid codepoint for {} (\\{}): {}",
                bad.name, bad.hex, bad.reason
            );
        }
    }

    Ok(outcome.records)
}
