//! Cursor navigation over boundary sets
//!
//! [`BoundaryIterator`] walks the boundaries of one kind across one
//! [`Text`]. Each call drives the lazy boundary scan just far enough to
//! answer it, so walking the first few boundaries of a large text never
//! pays for the rest.

use crate::classes::BoundaryKind;
use crate::error::Result;
use crate::text::Text;

/// A cursor over the boundaries of one analysis kind.
///
/// The cursor tracks a current position, which is always a member of the
/// boundary set. Navigation methods return the boundary they landed on,
/// or `None` as the done sentinel: requests past either end of the set
/// (including any offset beyond the text) yield `None` rather than an
/// error, and leave the cursor where it was.
///
/// Errors surface only when extending the scan itself fails; a failed
/// scan replays the same error on every later call.
#[derive(Debug)]
pub struct BoundaryIterator<'a> {
    text: &'a Text,
    kind: BoundaryKind,
    position: usize,
}

impl<'a> BoundaryIterator<'a> {
    pub(crate) fn new(text: &'a Text, kind: BoundaryKind) -> Self {
        BoundaryIterator {
            text,
            kind,
            position: 0,
        }
    }

    /// The analysis kind this cursor walks.
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// The boundary the cursor currently sits on.
    pub fn current(&self) -> usize {
        self.position
    }

    /// Moves to the first boundary. Always 0, even for empty text.
    pub fn first(&mut self) -> usize {
        self.position = 0;
        0
    }

    /// Moves to the final boundary, scanning the whole text.
    ///
    /// The final boundary equals the text's scalar count; for empty text
    /// it coincides with the first boundary, 0.
    pub fn last(&mut self) -> Result<usize> {
        let boundary = self.text.last_boundary(self.kind)?;
        self.position = boundary;
        Ok(boundary)
    }

    /// Moves to the next boundary strictly after the current position.
    ///
    /// `None` when the cursor already sits on the final boundary.
    pub fn next(&mut self) -> Result<Option<usize>> {
        self.advance_to(self.text.boundary_after(self.kind, self.position)?)
    }

    /// Moves to the nearest boundary strictly before the current position.
    ///
    /// `None` when the cursor already sits on the first boundary.
    pub fn previous(&mut self) -> Result<Option<usize>> {
        self.advance_to(self.text.boundary_before(self.kind, self.position)?)
    }

    /// Moves to the nearest boundary strictly after `offset`.
    ///
    /// `None` when `offset` is at or past the end of the text; the final
    /// boundary has nothing after it.
    pub fn following(&mut self, offset: usize) -> Result<Option<usize>> {
        if offset >= self.text.len() {
            return Ok(None);
        }
        self.advance_to(self.text.boundary_after(self.kind, offset)?)
    }

    /// Moves to the nearest boundary strictly before `offset`.
    ///
    /// `None` when `offset` is 0 or beyond the end of the text.
    pub fn preceding(&mut self, offset: usize) -> Result<Option<usize>> {
        if offset == 0 || offset > self.text.len() {
            return Ok(None);
        }
        self.advance_to(self.text.boundary_before(self.kind, offset)?)
    }

    /// Whether `offset` is a member of the boundary set.
    ///
    /// The cursor does not move. Offsets beyond the text are not
    /// boundaries.
    pub fn is_boundary(&self, offset: usize) -> Result<bool> {
        if offset > self.text.len() {
            return Ok(false);
        }
        self.text.boundary_at(self.kind, offset)
    }

    fn advance_to(&mut self, found: Option<usize>) -> Result<Option<usize>> {
        if let Some(boundary) = found {
            self.position = boundary;
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(iter: &mut BoundaryIterator<'_>) -> Vec<usize> {
        let mut found = vec![iter.first()];
        while let Some(boundary) = iter.next().unwrap() {
            found.push(boundary);
        }
        found
    }

    #[test]
    fn test_forward_walk_covers_all_boundaries() {
        let text = Text::new("Hello, world!");
        let mut iter = text.create_iterator(BoundaryKind::Word);
        assert_eq!(drain(&mut iter), vec![0, 5, 6, 7, 12, 13]);
        // Exhausted cursor keeps answering None without moving.
        assert_eq!(iter.next().unwrap(), None);
        assert_eq!(iter.current(), 13);
    }

    #[test]
    fn test_backward_walk_mirrors_forward() {
        let text = Text::new("Hello, world!");
        let mut iter = text.create_iterator(BoundaryKind::Word);
        assert_eq!(iter.last().unwrap(), 13);
        let mut reversed = vec![13];
        while let Some(boundary) = iter.previous().unwrap() {
            reversed.push(boundary);
        }
        reversed.reverse();
        assert_eq!(reversed, vec![0, 5, 6, 7, 12, 13]);
        assert_eq!(iter.previous().unwrap(), None);
        assert_eq!(iter.current(), 0);
    }

    #[test]
    fn test_following_from_interior_offset() {
        let text = Text::new("Hello, world!");
        let mut iter = text.create_iterator(BoundaryKind::Word);
        // 3 sits inside "Hello"; the boundary after it closes that word.
        assert_eq!(iter.following(3).unwrap(), Some(5));
        assert_eq!(iter.current(), 5);
        // From a boundary, following is strictly after.
        assert_eq!(iter.following(5).unwrap(), Some(6));
    }

    #[test]
    fn test_preceding_from_interior_offset() {
        let text = Text::new("Hello, world!");
        let mut iter = text.create_iterator(BoundaryKind::Word);
        assert_eq!(iter.preceding(10).unwrap(), Some(7));
        assert_eq!(iter.current(), 7);
        assert_eq!(iter.preceding(7).unwrap(), Some(6));
        assert_eq!(iter.preceding(1).unwrap(), Some(0));
    }

    #[test]
    fn test_out_of_range_clamps_to_done() {
        let text = Text::new("abc");
        let mut iter = text.create_iterator(BoundaryKind::Grapheme);
        assert_eq!(iter.following(3).unwrap(), None);
        assert_eq!(iter.following(100).unwrap(), None);
        assert_eq!(iter.preceding(0).unwrap(), None);
        assert_eq!(iter.preceding(4).unwrap(), None);
        assert!(!iter.is_boundary(4).unwrap());
        // A clamped request leaves the cursor alone.
        assert_eq!(iter.current(), 0);
    }

    #[test]
    fn test_is_boundary_matches_walk() {
        let text = Text::new("Hello, world!");
        let iter = text.create_iterator(BoundaryKind::Word);
        assert!(iter.is_boundary(0).unwrap());
        assert!(iter.is_boundary(5).unwrap());
        assert!(iter.is_boundary(13).unwrap());
        assert!(!iter.is_boundary(3).unwrap());
        assert!(!iter.is_boundary(9).unwrap());
    }

    #[test]
    fn test_empty_text_cursor() {
        let text = Text::new("");
        let mut iter = text.create_iterator(BoundaryKind::Sentence);
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.last().unwrap(), 0);
        assert_eq!(iter.next().unwrap(), None);
        assert_eq!(iter.previous().unwrap(), None);
        assert!(iter.is_boundary(0).unwrap());
        assert!(!iter.is_boundary(1).unwrap());
    }

    #[test]
    fn test_independent_cursors_share_one_cache() {
        let text = Text::new("one two three");
        let mut a = text.create_iterator(BoundaryKind::Word);
        let mut b = text.create_iterator(BoundaryKind::Word);
        assert_eq!(a.next().unwrap(), Some(3));
        // The second cursor starts fresh while reusing the scan.
        assert_eq!(b.next().unwrap(), Some(3));
        assert_eq!(a.next().unwrap(), Some(4));
        assert_eq!(b.following(8).unwrap(), Some(13));
    }

    #[test]
    fn test_kind_is_reported() {
        let text = Text::new("x");
        let iter = text.create_iterator(BoundaryKind::Line);
        assert_eq!(iter.kind(), BoundaryKind::Line);
    }
}
