//! Property tests for the universal boundary invariants
//!
//! These hold for every text and every boundary kind: the boundary set is
//! well formed, navigation agrees with the set, and segments reconstruct
//! the input. Grapheme atomicity is checked by concatenating fragments
//! that are single clusters by construction.

use proptest::prelude::*;

use kugiri_core::{BoundaryKind, Text};

/// Mixed fragments: plain words, punctuation, and the cluster shapes the
/// rules treat specially.
fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z]{1,8}",
        "[0-9]{1,4}",
        Just(" ".to_string()),
        Just(". ".to_string()),
        Just("! ".to_string()),
        Just(", ".to_string()),
        Just("\r\n".to_string()),
        Just("e\u{0301}".to_string()),
        Just("\u{1F1FA}\u{1F1F8}".to_string()),
        Just("\u{1F469}\u{200D}\u{1F4BB}".to_string()),
        Just("\u{1100}\u{1161}\u{11A8}".to_string()),
        Just("\u{AC00}".to_string()),
        Just("漢字".to_string()),
        Just("\"".to_string()),
    ]
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..12).prop_map(|parts| parts.concat())
}

/// Fragments that are exactly one grapheme cluster each. None of them
/// starts with a scalar that could attach to the previous fragment, so a
/// concatenation has a boundary precisely at every join.
fn cluster() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::char::range('a', 'z').prop_map(|c| c.to_string()),
        Just("\r\n".to_string()),
        Just("e\u{0301}".to_string()),
        Just("a\u{0308}\u{0301}".to_string()),
        Just("\u{1F1EF}\u{1F1F5}".to_string()),
        Just("\u{1F469}\u{200D}\u{1F4BB}".to_string()),
        Just("\u{1100}\u{1161}\u{11A8}".to_string()),
        Just("\u{AC01}".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// The set starts at 0, ends at the scalar count, and is strictly
    /// increasing; an empty text has exactly the start boundary.
    #[test]
    fn prop_boundary_set_is_well_formed(text in text_strategy()) {
        let text = Text::new(text);
        for kind in BoundaryKind::ALL {
            let bounds = text.boundaries(kind).unwrap();
            prop_assert_eq!(bounds.first(), Some(&0), "{}", kind);
            prop_assert_eq!(bounds.last(), Some(&text.len()), "{}", kind);
            prop_assert!(bounds.windows(2).all(|w| w[0] < w[1]), "{}", kind);
            if text.is_empty() {
                prop_assert_eq!(bounds.len(), 1);
            }
        }
    }

    /// `is_boundary` agrees with the boundary set at every offset, inside
    /// and past the text.
    #[test]
    fn prop_is_boundary_matches_the_set(text in text_strategy()) {
        let text = Text::new(text);
        for kind in BoundaryKind::ALL {
            let bounds = text.boundaries(kind).unwrap();
            let cursor = text.create_iterator(kind);
            for offset in 0..=text.len() {
                prop_assert_eq!(
                    cursor.is_boundary(offset).unwrap(),
                    bounds.binary_search(&offset).is_ok(),
                    "kind {} offset {}", kind, offset
                );
            }
            prop_assert!(!cursor.is_boundary(text.len() + 1).unwrap());
        }
    }

    /// `following` returns the nearest boundary strictly after the offset
    /// and `preceding` the nearest strictly before it.
    #[test]
    fn prop_navigation_agrees_with_the_set(text in text_strategy()) {
        let text = Text::new(text);
        for kind in BoundaryKind::ALL {
            let bounds = text.boundaries(kind).unwrap();
            let mut cursor = text.create_iterator(kind);
            for offset in 0..text.len() {
                let expected = bounds.iter().copied().find(|&b| b > offset);
                prop_assert_eq!(cursor.following(offset).unwrap(), expected);
            }
            prop_assert_eq!(cursor.following(text.len()).unwrap(), None);
            for offset in 1..=text.len() {
                let expected = bounds.iter().rev().copied().find(|&b| b < offset);
                prop_assert_eq!(cursor.preceding(offset).unwrap(), expected);
            }
            prop_assert_eq!(cursor.preceding(0).unwrap(), None);
        }
    }

    /// A forward walk with `next` visits every boundary after the start,
    /// in order, then stays done.
    #[test]
    fn prop_forward_walk_visits_the_set(text in text_strategy()) {
        let text = Text::new(text);
        for kind in BoundaryKind::ALL {
            let bounds = text.boundaries(kind).unwrap();
            let mut cursor = text.create_iterator(kind);
            let mut walked = vec![cursor.current()];
            while let Some(boundary) = cursor.next().unwrap() {
                walked.push(boundary);
            }
            prop_assert_eq!(&walked, &bounds);
            prop_assert_eq!(cursor.next().unwrap(), None);
        }
    }

    /// Segments between consecutive boundaries reconstruct the text.
    #[test]
    fn prop_segments_reconstruct_the_text(text in text_strategy()) {
        let text = Text::new(text);
        for kind in BoundaryKind::ALL {
            let joined: String = text.segments(kind).unwrap().concat();
            prop_assert_eq!(joined.as_str(), text.as_str(), "{}", kind);
        }
    }

    /// A concatenation of single-cluster fragments has grapheme boundaries
    /// exactly at the fragment joins.
    #[test]
    fn prop_clusters_stay_atomic(parts in prop::collection::vec(cluster(), 0..10)) {
        let mut expected = vec![0];
        let mut scalars = 0;
        for part in &parts {
            scalars += part.chars().count();
            expected.push(scalars);
        }

        let text = Text::new(parts.concat());
        prop_assert_eq!(text.boundaries(BoundaryKind::Grapheme).unwrap(), expected);
    }
}
