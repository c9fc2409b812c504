//! Shell integration snippets
//!
//! `--init <shell>` prints a function named `nfzf` that pipes the plain
//! listing into fzf with a preview of the selected glyph.

/// fish function
pub const FISH_SNIPPET: &str = r#"function nfzf
		nf-list $argv | fzf --style minimal -m --ansi --preview '
			set parts (string split " -> " -- {})
			set class $parts[1]

			set right (string split " | " -- $parts[2])
			set hex $right[1]
			set char $right[2]

			echo -e "Name:   $class"
			echo -e "Symbol: $char"
			echo -e "Hex:    $hex\n"
			echo -e "$char $char $char"
		'
	end"#;

/// bash/zsh function
pub const POSIX_SNIPPET: &str = r#"nfzf() {
		nf-list "$@" | fzf --style minimal -m --ansi --preview '
			line="{}"
			class="${line%% -> *}"
			right="${line#* -> }"
			hex="${right%% | *}"
			char="${right#* | }"

			echo -e "Name:   $class"
			echo -e "Symbol: $char"
			echo -e "Hex:    $hex\n"
			echo -e "$char $char $char"
		'
	}"#;

/// Shells with an integration snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Fish,
    /// bash and zsh share one snippet
    Posix,
}

impl std::str::FromStr for Shell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fish" => Ok(Shell::Fish),
            "bash" | "zsh" => Ok(Shell::Posix),
            _ => Err(format!("Unsupported shell: {}", s)),
        }
    }
}

impl Shell {
    pub fn snippet(self) -> &'static str {
        match self {
            Shell::Fish => FISH_SNIPPET,
            Shell::Posix => POSIX_SNIPPET,
        }
    }
}

/// Print the snippet for `name` to stdout, or a diagnostic to stderr.
/// An unknown shell is reported but is not an error.
pub fn run_init(name: &str) {
    match name.parse::<Shell>() {
        Ok(shell) => println!("{}", shell.snippet()),
        Err(msg) => eprintln!("{}", msg),
    }
}
