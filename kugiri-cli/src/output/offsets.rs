//! Offset range output formatter

use std::io::Write;
use std::ops::Range;

use anyhow::Result;

use super::OutputFormatter;

/// Formats segments as `start..end` scalar ranges, one per line, with the
/// segment text appended in debug form.
pub struct OffsetsFormatter<W: Write> {
    writer: W,
}

impl<W: Write> OffsetsFormatter<W> {
    /// Create a new offsets formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for OffsetsFormatter<W> {
    fn format_segment(&mut self, segment: &str, range: Range<usize>) -> Result<()> {
        writeln!(self.writer, "{}..{}\t{:?}", range.start, range.end, segment)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
