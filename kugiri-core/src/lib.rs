//! Rule-based Unicode text segmentation
//!
//! This crate finds the boundaries of grapheme clusters, words, sentences,
//! and line-break opportunities in decoded text. Segmentation runs as a
//! single left-to-right pass: each scalar is classified through compact
//! range tables, then an ordered, first-match-wins rule table decides
//! break or no-break at every position. Boundary sets are computed lazily
//! and memoized per text, so cursor navigation pays only for the prefix it
//! visits.
//!
//! # Architecture
//!
//! Data flows one way through the crate:
//! - **Decoding**: [`Text`] construction converts UTF-8 or UTF-16 bytes
//!   into scalars, keeping an [`OffsetMap`] back to source units.
//! - **Classification**: [`BreakData`] maps each scalar to one break class
//!   per boundary kind via sorted range tables.
//! - **Scanning**: the rule engine walks the classified stream and emits
//!   boundary positions, never retracting a decision.
//! - **Navigation**: [`BoundaryIterator`] and the bulk accessors on
//!   [`Text`] read the memoized boundary sets.
//!
//! # Example
//!
//! ```rust
//! use kugiri_core::{BoundaryKind, Text};
//!
//! let text = Text::new("Mr. Smith went home. He ate.");
//!
//! // Bulk segmentation: the abbreviation "Mr." does not end a sentence.
//! let sentences = text.segments(BoundaryKind::Sentence).unwrap();
//! assert_eq!(sentences, ["Mr. Smith went home. ", "He ate."]);
//!
//! // Cursor navigation over word boundaries.
//! let mut words = text.create_iterator(BoundaryKind::Word);
//! assert_eq!(words.first(), 0);
//! assert_eq!(words.next().unwrap(), Some(2));
//! assert!(words.is_boundary(3).unwrap());
//! ```
//!
//! Positions are scalar indices into the decoded content; 0 and the scalar
//! count are always boundaries, and the boundary set of empty text is
//! exactly `{0}`.

mod boundaries;
mod classes;
mod data;
mod decode;
mod engine;
mod error;
mod iter;
mod offset_map;
mod property;
mod rules;
mod text;

pub use classes::{
    BoundaryKind, BreakClass, GraphemeClass, LineClass, SentenceClass, WordClass,
};
pub use data::{BreakData, BreakDataBuilder, SuppressionCategories, SuppressionsConfig};
pub use decode::{DecodePolicy, DecodedScalar, Decoder, TextEncoding};
pub use error::{Error, Result};
pub use iter::BoundaryIterator;
pub use offset_map::OffsetMap;
pub use rules::sentence::Suppressions;
pub use text::Text;
