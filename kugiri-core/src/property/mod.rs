//! Range-based break-class lookup tables
//!
//! Each boundary kind owns one table of sorted, disjoint scalar ranges.
//! Lookup is a binary search over the ranges, with a direct-indexed fast
//! path for ASCII. Scalars covered by no range classify as the kind's
//! fallback class (id 0). Range lists are validated when the table is
//! built; a malformed list is a load-time error, never a scan-time one.

mod ranges;

pub(crate) mod grapheme;
pub(crate) mod line;
pub(crate) mod sentence;
pub(crate) mod word;

use crate::error::{Error, Result};

/// One classified scalar range: start and end are inclusive.
pub(crate) type RangeEntry = (u32, u32, u8);

/// Append `ranges` to `out` under a single class id.
fn extend_with(out: &mut Vec<RangeEntry>, ranges: &[(u32, u32)], class: u8) {
    out.extend(ranges.iter().map(|&(start, end)| (start, end, class)));
}

/// Sorted, disjoint scalar ranges mapping to class ids for one kind.
#[derive(Debug, Clone)]
pub(crate) struct ClassTable {
    ranges: Vec<RangeEntry>,
    ascii: [u8; 128],
}

impl ClassTable {
    /// Build and validate a table from unordered entries.
    pub(crate) fn from_entries(mut entries: Vec<RangeEntry>, alphabet_len: usize) -> Result<Self> {
        entries.sort_unstable_by_key(|&(start, _, _)| start);
        let mut prev_end: Option<u32> = None;
        for &(start, end, class) in &entries {
            if start > end {
                return Err(Error::InvalidTable(format!(
                    "range {start:#X}..={end:#X} is inverted"
                )));
            }
            if usize::from(class) >= alphabet_len {
                return Err(Error::InvalidTable(format!(
                    "range {start:#X}..={end:#X} names class {class}, alphabet has {alphabet_len}"
                )));
            }
            if let Some(prev) = prev_end {
                if start <= prev {
                    return Err(Error::InvalidTable(format!(
                        "range {start:#X}..={end:#X} overlaps a range ending at {prev:#X}"
                    )));
                }
            }
            prev_end = Some(end);
        }
        let mut table = ClassTable {
            ranges: entries,
            ascii: [0; 128],
        };
        for cp in 0..128u32 {
            table.ascii[cp as usize] = table.lookup(cp);
        }
        Ok(table)
    }

    /// Class id for a scalar; 0 (the fallback) when no range covers it.
    pub(crate) fn classify(&self, cp: u32) -> u8 {
        if cp < 128 {
            return self.ascii[cp as usize];
        }
        self.lookup(cp)
    }

    fn lookup(&self, cp: u32) -> u8 {
        let idx = self.ranges.partition_point(|&(_, end, _)| end < cp);
        match self.ranges.get(idx) {
            Some(&(start, _, class)) if start <= cp => class,
            _ => 0,
        }
    }
}
