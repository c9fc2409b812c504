//! Runtime configuration
//!
//! Built once from the parsed command line and passed by reference to every
//! stage of the pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// Remote location of the Nerd Fonts generated stylesheet
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/ryanoasis/nerd-fonts/refs/heads/master/css/nerd-fonts-generated.css";

/// Default cache time-to-live in hours
pub const DEFAULT_TTL_HOURS: u64 = 24;

/// How the selected glyphs are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `<name> -> <hex> | <char>`
    #[default]
    Plain,
    /// The character only
    Compact,
    /// A JSON array of glyph objects
    Json,
}

impl OutputMode {
    /// JSON takes precedence over compact when both flags are set.
    pub fn from_flags(compact: bool, json: bool) -> Self {
        if json {
            OutputMode::Json
        } else if compact {
            OutputMode::Compact
        } else {
            OutputMode::Plain
        }
    }
}

/// Cache and network settings for the fetcher
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Base cache directory; the stylesheet lives under `<base_dir>/nf-list/`
    pub base_dir: PathBuf,

    /// Maximum age of the cached stylesheet
    pub ttl: Duration,

    /// Stylesheet URL
    pub url: String,

    /// Ignore a fresh cache and fetch anyway
    pub refresh: bool,

    /// Treat a non-2xx response as a fetch failure instead of using its body
    pub fail_on_http_error: bool,
}

impl CacheConfig {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ttl: ttl_from_hours(DEFAULT_TTL_HOURS),
            url: DEFAULT_URL.to_string(),
            refresh: false,
            fail_on_http_error: false,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(default_cache_base())
    }
}

/// Everything a single invocation needs
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Keywords that must all appear in a glyph's name or hex
    pub search: Vec<String>,

    /// Group prefixes; a glyph matches `nf-<prefix>-` for any of them
    pub groups: Vec<String>,

    /// Pick one glyph at random from the unfiltered set
    pub random: bool,

    pub mode: OutputMode,

    /// Shell name for `--init`; short-circuits everything else
    pub init_shell: Option<String>,

    /// Report undecodable glyph definitions on stderr
    pub report_invalid: bool,

    pub cache: CacheConfig,
}

/// `$HOME/.cache`, or a relative `.cache` when the home directory is unknown
pub fn default_cache_base() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".cache"))
        .unwrap_or_else(|| PathBuf::from(".cache"))
}

/// Hours to a TTL; values too large to represent saturate
pub fn ttl_from_hours(hours: u64) -> Duration {
    Duration::from_secs(hours.saturating_mul(60 * 60))
}
