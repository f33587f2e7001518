//! Grapheme cluster break classes

use super::{extend_with, ranges, ClassTable, RangeEntry};
use crate::classes::GraphemeClass as G;
use crate::error::Result;

/// Controls that always stand alone. Cc and the format controls that do
/// not join (ZWJ and ZWNJ are elsewhere).
const CONTROL: &[(u32, u32)] = &[
    (0x0000, 0x0009),
    (0x000B, 0x000C),
    (0x000E, 0x001F),
    (0x007F, 0x009F),
    (0x00AD, 0x00AD),
    (0x061C, 0x061C),
    (0x180E, 0x180E),
    (0x200B, 0x200B),
    (0x200E, 0x200F),
    (0x2028, 0x2029),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
];

const PREPEND: &[(u32, u32)] = &[
    (0x0600, 0x0605),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x08E2, 0x08E2),
    (0x0D4E, 0x0D4E),
];

pub(crate) fn table() -> Result<ClassTable> {
    let mut entries: Vec<RangeEntry> = vec![
        (0x0D, 0x0D, G::Cr.id()),
        (0x0A, 0x0A, G::Lf.id()),
        (0x200D, 0x200D, G::Zwj.id()),
        (
            ranges::REGIONAL_INDICATORS.0,
            ranges::REGIONAL_INDICATORS.1,
            G::RegionalIndicator.id(),
        ),
    ];
    extend_with(&mut entries, CONTROL, G::Control.id());
    extend_with(&mut entries, PREPEND, G::Prepend.id());
    extend_with(&mut entries, ranges::EXTEND_MARKS, G::Extend.id());
    extend_with(&mut entries, ranges::SPACING_MARKS, G::SpacingMark.id());
    extend_with(
        &mut entries,
        ranges::EXTENDED_PICTOGRAPHIC,
        G::ExtendedPictographic.id(),
    );
    extend_with(&mut entries, ranges::HANGUL_L, G::HangulL.id());
    extend_with(&mut entries, ranges::HANGUL_V, G::HangulV.id());
    extend_with(&mut entries, ranges::HANGUL_T, G::HangulT.id());
    ClassTable::from_entries(entries, G::COUNT)
}

/// Precomposed Hangul syllables are interleaved LV/LVT, so their class is
/// computed instead of stored as ranges.
pub(crate) fn syllable_class(cp: u32) -> Option<u8> {
    if !ranges::is_hangul_syllable(cp) {
        return None;
    }
    Some(if ranges::hangul_syllable_is_lv(cp) {
        G::HangulLv.id()
    } else {
        G::HangulLvt.id()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(c: char) -> u8 {
        let cp = u32::from(c);
        syllable_class(cp).unwrap_or_else(|| table().unwrap().classify(cp))
    }

    #[test]
    fn test_core_classes() {
        assert_eq!(classify('\r'), G::Cr.id());
        assert_eq!(classify('\n'), G::Lf.id());
        assert_eq!(classify('\t'), G::Control.id());
        assert_eq!(classify('\u{0301}'), G::Extend.id());
        assert_eq!(classify('\u{200D}'), G::Zwj.id());
        assert_eq!(classify('\u{1F1E6}'), G::RegionalIndicator.id());
        assert_eq!(classify('🚒'), G::ExtendedPictographic.id());
        assert_eq!(classify('a'), G::Other.id());
    }

    #[test]
    fn test_skin_tone_modifier_extends() {
        assert_eq!(classify('\u{1F3FB}'), G::Extend.id());
    }

    #[test]
    fn test_hangul_shapes() {
        assert_eq!(classify('ᄀ'), G::HangulL.id()); // U+1100
        assert_eq!(classify('ᅡ'), G::HangulV.id()); // U+1161
        assert_eq!(classify('ᆨ'), G::HangulT.id()); // U+11A8
        assert_eq!(classify('가'), G::HangulLv.id()); // U+AC00
        assert_eq!(classify('각'), G::HangulLvt.id()); // U+AC01
        assert_eq!(classify('한'), G::HangulLvt.id()); // U+D55C
    }
}
