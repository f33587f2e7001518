//! Output formatting module

use std::ops::Range;

use anyhow::Result;

/// Trait for segment output formatters
pub trait OutputFormatter {
    /// Format and output a single segment and its scalar range
    fn format_segment(&mut self, segment: &str, range: Range<usize>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod offsets;
pub mod text;

pub use json::JsonFormatter;
pub use offsets::OffsetsFormatter;
pub use text::TextFormatter;
