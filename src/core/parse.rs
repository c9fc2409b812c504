//! Stylesheet parsing module
//!
//! Extracts glyph definitions of the form:
//! .nf-dev-github:before { content: "\f121"; }

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::NfError;
use crate::core::model::{GlyphRecord, RejectedGlyph};

/// Static regex for glyph definitions
/// Captures the class name (without the dot) and the hex codepoint
pub static GLYPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)\.([^\s:]+):before\s*\{\s*content:\s*"\\([a-fA-F0-9]+)";\s*\}"#)
        .expect("Invalid GLYPH_RE regex")
});

/// Result of parsing a stylesheet
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Decoded glyphs in source order
    pub records: Vec<GlyphRecord>,
    /// Definitions whose codepoint could not be decoded
    pub rejected: Vec<RejectedGlyph>,
}

/// Parse every glyph definition in `text`
pub fn parse_glyphs(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for caps in GLYPH_RE.captures_iter(text) {
        let name = &caps[1];
        let hex = &caps[2];

        match GlyphRecord::decode(name, hex) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                let reason = match e {
                    NfError::Decode { reason, .. } => reason,
                    other => other.to_string(),
                };
                outcome.rejected.push(RejectedGlyph {
                    name: name.to_string(),
                    hex: hex.to_string(),
                    reason,
                });
            }
        }
    }

    outcome
}
