//! Decoded text and its per-kind boundary caches
//!
//! [`Text`] is the sole owner of the decoded content and its offset map.
//! Iterators borrow from it and drive the boundary scan lazily; one mutex
//! per boundary kind guards the lazy-extension step, so a shared `Text` is
//! safe to segment from multiple threads.

use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::boundaries::{BoundaryCache, ScanInput};
use crate::classes::{BoundaryKind, BreakClass};
use crate::data::BreakData;
use crate::decode::{decode_full, DecodePolicy, TextEncoding};
use crate::error::Result;
use crate::iter::BoundaryIterator;
use crate::offset_map::OffsetMap;

/// A decoded text ready for boundary analysis.
///
/// Construction decodes the source buffer once; all segmentation is over
/// the decoded scalars, with positions expressed as scalar indices. The
/// [`OffsetMap`] converts those back to source offsets on demand.
#[derive(Debug)]
pub struct Text {
    content: String,
    offsets: OffsetMap,
    data: Arc<BreakData>,
    caches: [Mutex<BoundaryCache>; 4],
}

fn fresh_caches() -> [Mutex<BoundaryCache>; 4] {
    std::array::from_fn(|_| Mutex::new(BoundaryCache::new()))
}

impl Text {
    /// Wraps an already decoded string, using the built-in break data.
    pub fn new(text: impl Into<String>) -> Self {
        let content = text.into();
        let offsets = OffsetMap::from_str_content(&content);
        Text {
            content,
            offsets,
            data: BreakData::builtin(),
            caches: fresh_caches(),
        }
    }

    /// Decodes `bytes` under the default policy (replace malformed
    /// sequences with U+FFFD).
    pub fn from_encoded_bytes(bytes: &[u8], encoding: TextEncoding) -> Result<Self> {
        Text::from_encoded_bytes_with(bytes, encoding, DecodePolicy::default())
    }

    /// Decodes `bytes` under an explicit malformed-sequence policy.
    ///
    /// Under [`DecodePolicy::Strict`] the first malformed sequence aborts
    /// construction with [`Error::Decode`](crate::Error::Decode).
    pub fn from_encoded_bytes_with(
        bytes: &[u8],
        encoding: TextEncoding,
        policy: DecodePolicy,
    ) -> Result<Self> {
        let (content, offsets) = decode_full(bytes, encoding, policy)?;
        Ok(Text {
            content,
            offsets,
            data: BreakData::builtin(),
            caches: fresh_caches(),
        })
    }

    /// Replaces the break data, discarding any boundaries already found.
    #[must_use]
    pub fn with_break_data(mut self, data: Arc<BreakData>) -> Self {
        self.data = data;
        self.caches = fresh_caches();
        self
    }

    /// Number of scalars in the decoded content.
    pub fn len(&self) -> usize {
        self.offsets.scalar_count()
    }

    /// True when the decoded content has no scalars.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The decoded content.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// The break data this text is analyzed with.
    pub fn break_data(&self) -> &Arc<BreakData> {
        &self.data
    }

    /// Scalar-to-source offset records for the decoded content.
    pub fn offset_map(&self) -> &OffsetMap {
        &self.offsets
    }

    /// Source-buffer offset of the given scalar; `len()` addresses end of
    /// input. `None` past that.
    pub fn source_offset(&self, scalar: usize) -> Option<usize> {
        self.offsets.source_offset(scalar)
    }

    /// Scalar whose source span contains the given source offset.
    pub fn scalar_at_source(&self, source_offset: usize) -> Option<usize> {
        self.offsets.scalar_at_source(source_offset)
    }

    /// Borrowed view of a scalar range, or `None` when the range is
    /// out of bounds.
    pub fn substring(&self, scalars: Range<usize>) -> Option<&str> {
        if scalars.start > scalars.end || scalars.end > self.len() {
            return None;
        }
        Some(&self.content[self.offsets.content_range(scalars)])
    }

    /// Break class of the scalar at the given index, or `None` past the
    /// end.
    pub fn classify(&self, kind: BoundaryKind, scalar: usize) -> Option<BreakClass> {
        if scalar >= self.len() {
            return None;
        }
        let slice = &self.content[self.offsets.content_range(scalar..scalar + 1)];
        let c = slice.chars().next()?;
        Some(self.data.classify(kind, c))
    }

    /// Cursor over the boundaries of the given kind.
    pub fn create_iterator(&self, kind: BoundaryKind) -> BoundaryIterator<'_> {
        BoundaryIterator::new(self, kind)
    }

    /// All boundaries of the given kind, in increasing scalar order.
    ///
    /// Always starts with 0 and ends with `len()`; for empty text the set
    /// is exactly `[0]`.
    pub fn boundaries(&self, kind: BoundaryKind) -> Result<Vec<usize>> {
        let input = self.scan_input(kind);
        let mut cache = self.lock_cache(kind);
        cache.ensure_all(&input)?;
        Ok(cache.known().to_vec())
    }

    /// Scalar ranges of the segments between consecutive boundaries.
    pub fn segment_ranges(&self, kind: BoundaryKind) -> Result<Vec<Range<usize>>> {
        let bounds = self.boundaries(kind)?;
        Ok(bounds.windows(2).map(|pair| pair[0]..pair[1]).collect())
    }

    /// The segments between consecutive boundaries, as borrowed views.
    pub fn segments(&self, kind: BoundaryKind) -> Result<Vec<&str>> {
        let ranges = self.segment_ranges(kind)?;
        Ok(ranges
            .into_iter()
            .map(|range| &self.content[self.offsets.content_range(range)])
            .collect())
    }

    /// Nearest boundary strictly after `position`, extending the scan as
    /// needed.
    pub(crate) fn boundary_after(
        &self,
        kind: BoundaryKind,
        position: usize,
    ) -> Result<Option<usize>> {
        let input = self.scan_input(kind);
        let mut cache = self.lock_cache(kind);
        cache.ensure_min(&input, position.saturating_add(1))?;
        Ok(cache.next_after(position))
    }

    /// Nearest boundary strictly before `position`, extending the scan as
    /// needed.
    pub(crate) fn boundary_before(
        &self,
        kind: BoundaryKind,
        position: usize,
    ) -> Result<Option<usize>> {
        let input = self.scan_input(kind);
        let mut cache = self.lock_cache(kind);
        cache.ensure_min(&input, position)?;
        Ok(cache.prev_before(position))
    }

    /// Membership test, extending the scan as needed.
    pub(crate) fn boundary_at(&self, kind: BoundaryKind, position: usize) -> Result<bool> {
        let input = self.scan_input(kind);
        let mut cache = self.lock_cache(kind);
        cache.ensure_min(&input, position)?;
        Ok(cache.contains(position))
    }

    /// The final boundary, scanning the rest of the text if necessary.
    pub(crate) fn last_boundary(&self, kind: BoundaryKind) -> Result<usize> {
        let input = self.scan_input(kind);
        let mut cache = self.lock_cache(kind);
        cache.ensure_all(&input)?;
        Ok(cache.known().last().copied().unwrap_or(0))
    }

    fn scan_input(&self, kind: BoundaryKind) -> ScanInput<'_> {
        ScanInput {
            data: &self.data,
            kind,
            content: &self.content,
            starts: self.offsets.content_starts(),
        }
    }

    // A poisoned lock still holds a consistent cache: the scan state is
    // sticky, so the worst outcome is replaying a stored error.
    fn lock_cache(&self, kind: BoundaryKind) -> MutexGuard<'_, BoundaryCache> {
        match self.caches[kind.index()].lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::rules::sentence::Suppressions;

    #[test]
    fn test_combining_mark_stays_attached() {
        let text = Text::new("e\u{0301}");
        assert_eq!(text.len(), 2);
        assert_eq!(text.boundaries(BoundaryKind::Grapheme).unwrap(), [0, 2]);
        assert_eq!(
            text.segments(BoundaryKind::Grapheme).unwrap(),
            ["e\u{0301}"]
        );
    }

    #[test]
    fn test_word_segments() {
        let text = Text::new("Hello, world!");
        assert_eq!(
            text.boundaries(BoundaryKind::Word).unwrap(),
            [0, 5, 6, 7, 12, 13]
        );
        assert_eq!(
            text.segments(BoundaryKind::Word).unwrap(),
            ["Hello", ",", " ", "world", "!"]
        );
    }

    #[test]
    fn test_sentence_abbreviation_suppressed() {
        let text = Text::new("Mr. Smith went home. He ate.");
        assert_eq!(
            text.boundaries(BoundaryKind::Sentence).unwrap(),
            [0, 21, 28]
        );
        assert_eq!(
            text.segments(BoundaryKind::Sentence).unwrap(),
            ["Mr. Smith went home. ", "He ate."]
        );
    }

    #[test]
    fn test_sentence_without_suppressions_splits_abbreviation() {
        let data = BreakData::builder()
            .suppressions(Suppressions::empty())
            .build()
            .unwrap();
        let text = Text::new("Mr. Smith went home. He ate.").with_break_data(data);
        assert_eq!(
            text.boundaries(BoundaryKind::Sentence).unwrap(),
            [0, 4, 21, 28]
        );
    }

    #[test]
    fn test_replace_policy_charges_ahead() {
        let text = Text::from_encoded_bytes(&[0x61, 0x80, 0x62], TextEncoding::Utf8).unwrap();
        assert_eq!(text.as_str(), "a\u{FFFD}b");
        assert_eq!(text.len(), 3);
        assert_eq!(text.source_offset(2), Some(2));
    }

    #[test]
    fn test_strict_policy_aborts() {
        let err = Text::from_encoded_bytes_with(
            &[0x61, 0x80, 0x62],
            TextEncoding::Utf8,
            DecodePolicy::Strict,
        )
        .unwrap_err();
        match err {
            Error::Decode { position, byte_len } => {
                assert_eq!(position, 1);
                assert_eq!(byte_len, 1);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_substring_is_scalar_addressed() {
        let text = Text::new("aé漢x");
        assert_eq!(text.substring(1..3), Some("é漢"));
        assert_eq!(text.substring(0..0), Some(""));
        assert_eq!(text.substring(3..4), Some("x"));
        assert_eq!(text.substring(2..1), None);
        assert_eq!(text.substring(3..5), None);
    }

    #[test]
    fn test_classify_scalar() {
        let text = Text::new("a 漢");
        let class = text.classify(BoundaryKind::Word, 0).unwrap();
        assert_eq!(class.name(), "ALetter");
        let class = text.classify(BoundaryKind::Line, 2).unwrap();
        assert_eq!(class.name(), "ID");
        assert_eq!(text.classify(BoundaryKind::Word, 3), None);
    }

    #[test]
    fn test_empty_text() {
        let text = Text::new("");
        assert!(text.is_empty());
        for kind in BoundaryKind::ALL {
            assert_eq!(text.boundaries(kind).unwrap(), [0]);
            assert!(text.segments(kind).unwrap().is_empty());
        }
    }

    #[test]
    fn test_segments_reassemble_content() {
        let text = Text::new("He said \u{201C}wait\u{201D} — twice.");
        for kind in BoundaryKind::ALL {
            let joined: String = text.segments(kind).unwrap().concat();
            assert_eq!(joined, text.as_str());
        }
    }

    #[test]
    fn test_text_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Text>();
    }

    #[test]
    fn test_concurrent_extension_agrees() {
        let text = Text::new("One two. Three four. Five.");
        std::thread::scope(|scope| {
            let shared = &text;
            let a = scope.spawn(move || shared.boundaries(BoundaryKind::Word).unwrap());
            let b = scope.spawn(move || shared.boundaries(BoundaryKind::Word).unwrap());
            assert_eq!(a.join().unwrap(), b.join().unwrap());
        });
    }
}
