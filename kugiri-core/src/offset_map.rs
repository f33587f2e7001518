//! Mapping between scalar indices and source-unit offsets
//!
//! Boundary positions are scalar indices. Callers that hold the original
//! encoded buffer need the raw offset a scalar came from; this map records
//! both the offset of each scalar in the decoded content and the offset of
//! the unit(s) it was decoded from.

use std::ops::Range;

/// Per-scalar offset records for one decoded buffer.
///
/// Both offset vectors carry one trailing entry past the last scalar, so a
/// scalar's span is always `offsets[i]..offsets[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetMap {
    /// Byte offset of each scalar in the decoded UTF-8 content.
    content: Vec<usize>,
    /// Offset of each scalar's first unit in the source buffer, in bytes.
    source: Vec<usize>,
}

impl OffsetMap {
    pub(crate) fn with_capacity(scalars: usize) -> Self {
        OffsetMap {
            content: Vec::with_capacity(scalars + 1),
            source: Vec::with_capacity(scalars + 1),
        }
    }

    /// Record one scalar starting at the given offsets.
    pub(crate) fn push(&mut self, content_offset: usize, source_offset: usize) {
        self.content.push(content_offset);
        self.source.push(source_offset);
    }

    /// Seal the map with the total lengths of both buffers.
    pub(crate) fn finish(&mut self, content_len: usize, source_len: usize) {
        self.content.push(content_len);
        self.source.push(source_len);
    }

    /// Number of scalars covered.
    pub fn scalar_count(&self) -> usize {
        self.source.len().saturating_sub(1)
    }

    /// Source-unit offset of the given scalar.
    ///
    /// `scalar` may equal the scalar count, addressing end of input.
    /// Returns `None` past that.
    pub fn source_offset(&self, scalar: usize) -> Option<usize> {
        self.source.get(scalar).copied()
    }

    /// Scalar index whose source span contains the given offset.
    ///
    /// Offsets inside a multi-unit sequence resolve to the scalar that
    /// sequence decodes to. Returns `None` past the end of the source.
    pub fn scalar_at_source(&self, source_offset: usize) -> Option<usize> {
        let total = *self.source.last()?;
        if source_offset >= total {
            return None;
        }
        let after = self.source.partition_point(|&s| s <= source_offset);
        Some(after - 1)
    }

    /// Content byte offset of the given scalar.
    pub(crate) fn content_offset(&self, scalar: usize) -> usize {
        self.content[scalar]
    }

    /// Content byte offsets of all scalars, with the trailing total length.
    pub(crate) fn content_starts(&self) -> &[usize] {
        &self.content
    }

    /// Content byte range covering a scalar range.
    pub(crate) fn content_range(&self, scalars: Range<usize>) -> Range<usize> {
        self.content[scalars.start]..self.content[scalars.end]
    }

    /// Build the identity-style map for an already decoded string.
    pub(crate) fn from_str_content(content: &str) -> Self {
        let mut map = OffsetMap::with_capacity(content.len());
        for (offset, _) in content.char_indices() {
            map.push(offset, offset);
        }
        map.finish(content.len(), content.len());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_identity() {
        let map = OffsetMap::from_str_content("abc");
        assert_eq!(map.scalar_count(), 3);
        assert_eq!(map.source_offset(0), Some(0));
        assert_eq!(map.source_offset(3), Some(3));
        assert_eq!(map.scalar_at_source(2), Some(2));
    }

    #[test]
    fn test_multibyte_spans() {
        // "aé漢" = 1 + 2 + 3 bytes
        let map = OffsetMap::from_str_content("aé漢");
        assert_eq!(map.scalar_count(), 3);
        assert_eq!(map.source_offset(1), Some(1));
        assert_eq!(map.source_offset(2), Some(3));
        assert_eq!(map.source_offset(3), Some(6));
        // offsets inside the é sequence resolve to scalar 1
        assert_eq!(map.scalar_at_source(1), Some(1));
        assert_eq!(map.scalar_at_source(2), Some(1));
        assert_eq!(map.scalar_at_source(5), Some(2));
        assert_eq!(map.scalar_at_source(6), None);
    }

    #[test]
    fn test_empty_map() {
        let map = OffsetMap::from_str_content("");
        assert_eq!(map.scalar_count(), 0);
        assert_eq!(map.source_offset(0), Some(0));
        assert_eq!(map.source_offset(1), None);
        assert_eq!(map.scalar_at_source(0), None);
    }

    #[test]
    fn test_content_range() {
        let map = OffsetMap::from_str_content("aé漢");
        assert_eq!(map.content_range(1..3), 1..6);
    }
}
