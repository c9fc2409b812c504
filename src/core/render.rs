//! Renderer module
//!
//! Renders glyph records as plain lines, bare characters or JSON

use std::io::{self, Write};

use crate::config::OutputMode;
use crate::core::model::GlyphRecord;

/// Renderer for glyph lists
pub struct Renderer {
    mode: OutputMode,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Render records to a writer; every line ends with a newline
    pub fn render_to<W: Write>(&self, records: &[GlyphRecord], mut writer: W) -> io::Result<()> {
        match self.mode {
            OutputMode::Plain => {
                for r in records {
                    writeln!(writer, "{} -> {} | {}", r.name, r.hex, r.character)?;
                }
            }
            OutputMode::Compact => {
                for r in records {
                    writeln!(writer, "{}", r.character)?;
                }
            }
            OutputMode::Json => {
                serde_json::to_writer(&mut writer, records)?;
                writeln!(writer)?;
            }
        }
        writer.flush()
    }
}
