//! JSON output formatter

use std::io::Write;
use std::ops::Range;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::OutputFormatter;

/// One segment in JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// The segment text, exactly as it appears in the content
    pub text: String,
    /// Scalar index of the first scalar of the segment
    pub start: usize,
    /// Scalar index one past the last scalar of the segment
    pub end: usize,
}

/// Formats segments as a JSON array.
///
/// Records are buffered and written as one pretty-printed document when
/// the stream is finalized.
pub struct JsonFormatter<W: Write> {
    writer: W,
    segments: Vec<SegmentRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            segments: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &str, range: Range<usize>) -> Result<()> {
        self.segments.push(SegmentRecord {
            text: segment.to_string(),
            start: range.start,
            end: range.end,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_round_trip_through_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.format_segment("Hi. ", 0..4).unwrap();
            formatter.format_segment("Bye.", 4..8).unwrap();
            formatter.finish().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let parsed: Vec<SegmentRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "Hi. ");
        assert_eq!(parsed[0].start, 0);
        assert_eq!(parsed[0].end, 4);
        assert_eq!(parsed[1].text, "Bye.");
    }

    #[test]
    fn test_empty_input_is_an_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
