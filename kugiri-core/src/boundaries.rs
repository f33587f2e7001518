//! Memoized per-kind boundary sets
//!
//! Each (text, kind) pair owns one cache. Scalar classes are computed on
//! first use; boundaries are appended as the scan advances and are never
//! retracted, so navigation over already-decided positions is pure binary
//! search.

use smallvec::{smallvec, SmallVec};

use crate::classes::BoundaryKind;
use crate::data::BreakData;
use crate::engine::{ScanCheckpoint, ScanState, Scanner};
use crate::error::Result;

/// Borrowed inputs for growing one cache.
pub(crate) struct ScanInput<'a> {
    pub(crate) data: &'a BreakData,
    pub(crate) kind: BoundaryKind,
    pub(crate) content: &'a str,
    pub(crate) starts: &'a [usize],
}

/// The lazily grown boundary set for one (text, kind) pair.
///
/// Position 0 is always present. A failed scan is sticky: the error is
/// replayed instead of rescanning.
#[derive(Debug)]
pub(crate) struct BoundaryCache {
    classes: Option<Vec<u8>>,
    boundaries: SmallVec<[usize; 16]>,
    state: ScanState,
}

impl BoundaryCache {
    pub(crate) fn new() -> Self {
        BoundaryCache {
            classes: None,
            boundaries: smallvec![0],
            state: ScanState::AtStart,
        }
    }

    /// Extends the scan until the largest decided boundary reaches
    /// `coverage`, or the text is exhausted.
    pub(crate) fn ensure_min(&mut self, input: &ScanInput<'_>, coverage: usize) -> Result<()> {
        while !self.is_complete() && self.frontier() < coverage {
            self.step(input)?;
        }
        Ok(())
    }

    /// Runs the scan to the end of the text.
    pub(crate) fn ensure_all(&mut self, input: &ScanInput<'_>) -> Result<()> {
        while !self.is_complete() {
            self.step(input)?;
        }
        Ok(())
    }

    pub(crate) fn is_complete(&self) -> bool {
        matches!(self.state, ScanState::AtEnd)
    }

    /// All boundaries decided so far, in increasing scalar order.
    pub(crate) fn known(&self) -> &[usize] {
        &self.boundaries
    }

    pub(crate) fn next_after(&self, position: usize) -> Option<usize> {
        let idx = self.boundaries.partition_point(|&b| b <= position);
        self.boundaries.get(idx).copied()
    }

    pub(crate) fn prev_before(&self, position: usize) -> Option<usize> {
        let idx = self.boundaries.partition_point(|&b| b < position);
        idx.checked_sub(1).map(|i| self.boundaries[i])
    }

    pub(crate) fn contains(&self, position: usize) -> bool {
        self.boundaries.binary_search(&position).is_ok()
    }

    /// Largest decided boundary.
    fn frontier(&self) -> usize {
        self.boundaries.last().copied().unwrap_or(0)
    }

    /// Advances the scan by exactly one boundary.
    fn step(&mut self, input: &ScanInput<'_>) -> Result<()> {
        let BoundaryCache {
            classes,
            boundaries,
            state,
        } = self;
        let checkpoint = match state {
            ScanState::AtStart => ScanCheckpoint::default(),
            ScanState::Scanning(checkpoint) => *checkpoint,
            ScanState::AtEnd => return Ok(()),
            ScanState::Failed(error) => return Err(error.clone()),
        };
        let classes =
            classes.get_or_insert_with(|| input.data.class_ids(input.kind, input.content));
        let mut scanner = Scanner::new(
            input.data.rule_table(input.kind),
            input.data.suppressions(),
            input.content,
            classes,
            input.starts,
            checkpoint,
        );
        match scanner.next_boundary() {
            Ok(Some(boundary)) => {
                boundaries.push(boundary);
                *state = ScanState::Scanning(scanner.checkpoint());
                Ok(())
            }
            Ok(None) => {
                *state = ScanState::AtEnd;
                Ok(())
            }
            Err(error) => {
                *state = ScanState::Failed(error.clone());
                Err(error)
            }
        }
    }
}
