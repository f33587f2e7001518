//! Plain text output formatter

use std::io::Write;
use std::ops::Range;

use anyhow::Result;

use super::OutputFormatter;

/// Formats segments as plain text, one per line.
///
/// Trailing whitespace is trimmed for display; the scalar range still
/// covers the untrimmed segment.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<std::io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &str, _range: Range<usize>) -> Result<()> {
        writeln!(self.writer, "{}", segment.trim_end())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_segment_per_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_segment("First sentence. ", 0..16).unwrap();
            formatter.format_segment("Second.", 16..23).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "First sentence.\nSecond.\n"
        );
    }

    #[test]
    fn test_leading_whitespace_is_kept() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_segment("  indented", 0..10).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "  indented\n");
    }
}
