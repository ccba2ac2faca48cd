//! The consumer side of the pipeline: what happens to each completed entry.

use std::io::Write;

use anyhow::{Context, Result};

use crate::history::Entry;
use crate::render::{OutputFormat, Renderer};
use crate::ui::Style;

/// Decides, per entry, between immediate rendering and a progress line.
///
/// When both a source file and a destination file are configured there is
/// nothing interactive about the run, so the entry itself stays out of the
/// terminal and only a progress indicator is written. In every other case
/// (stdin or inline arguments as the source, or the terminal as the
/// destination) the entry is rendered right away.
pub struct EntrySink {
    screen: Renderer,
    from_file: bool,
    to_file: bool,
}

impl EntrySink {
    pub fn new(from_file: bool, to_file: bool) -> Result<Self> {
        Ok(Self {
            // Terminal output is always the text formatter, whatever the
            // destination file's format is.
            screen: Renderer::new(OutputFormat::Text)?,
            from_file,
            to_file,
        })
    }

    /// Handles one completed entry. `sequence` is 1-based publication order.
    pub fn emit(&self, out: &mut dyn Write, entry: &Entry, sequence: usize) -> Result<()> {
        if self.from_file && self.to_file {
            writeln!(
                out,
                "{}",
                Style::secondary(format!("{sequence}. Got results for \"{}\"", entry.request))
            )
            .context("Failed to write progress line")?;
        } else {
            let rendered = self.screen.render_entry(entry, sequence)?;
            out.write_all(rendered.as_bytes())
                .context("Failed to write entry")?;
        }
        out.flush().context("Failed to flush output")?;
        Ok(())
    }
}
