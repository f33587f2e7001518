//! Scalar ranges shared by more than one alphabet
//!
//! Curated from the Unicode character database. Each list is sorted and
//! disjoint; table construction re-validates that after the per-kind lists
//! are merged in.

/// Non-spacing combining marks (plus ZWNJ and the marks that attach for
/// segmentation purposes even though they are spacing in general category).
pub(super) const EXTEND_MARKS: &[(u32, u32)] = &[
    (0x0300, 0x036F),
    (0x0483, 0x0489),
    (0x0591, 0x05BD),
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x0610, 0x061A),
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x0711, 0x0711),
    (0x0730, 0x074A),
    (0x07A6, 0x07B0),
    (0x07EB, 0x07F3),
    (0x0816, 0x0819),
    (0x081B, 0x0823),
    (0x0825, 0x0827),
    (0x0829, 0x082D),
    (0x0859, 0x085B),
    (0x08D3, 0x08E1),
    (0x08E3, 0x0902),
    (0x093A, 0x093A),
    (0x093C, 0x093C),
    (0x0941, 0x0948),
    (0x094D, 0x094D),
    (0x0951, 0x0957),
    (0x0962, 0x0963),
    (0x0981, 0x0981),
    (0x09BC, 0x09BC),
    (0x09BE, 0x09BE),
    (0x09C1, 0x09C4),
    (0x09CD, 0x09CD),
    (0x09D7, 0x09D7),
    (0x09E2, 0x09E3),
    (0x0BBE, 0x0BBE),
    (0x0BC0, 0x0BC0),
    (0x0BCD, 0x0BCD),
    (0x0BD7, 0x0BD7),
    (0x0E31, 0x0E31),
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    (0x0EB1, 0x0EB1),
    (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECD),
    (0x0F71, 0x0F7E),
    (0x0F80, 0x0F84),
    (0x102D, 0x1030),
    (0x1032, 0x1037),
    (0x1039, 0x103A),
    (0x135D, 0x135F),
    (0x1AB0, 0x1ACE),
    (0x1DC0, 0x1DFF),
    (0x200C, 0x200C),
    (0x20D0, 0x20F0),
    (0x2CEF, 0x2CF1),
    (0x2D7F, 0x2D7F),
    (0x2DE0, 0x2DFF),
    (0x302A, 0x302F),
    (0x3099, 0x309A),
    (0xA66F, 0xA672),
    (0xA674, 0xA67D),
    (0xFB1E, 0xFB1E),
    (0xFE00, 0xFE0F),
    (0xFE20, 0xFE2F),
    (0x1F3FB, 0x1F3FF),
    (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Spacing combining marks that extend a grapheme cluster visually.
pub(super) const SPACING_MARKS: &[(u32, u32)] = &[
    (0x0903, 0x0903),
    (0x093B, 0x093B),
    (0x093E, 0x0940),
    (0x0949, 0x094C),
    (0x094E, 0x094F),
    (0x0982, 0x0983),
    (0x09BF, 0x09C0),
    (0x09C7, 0x09C8),
    (0x09CB, 0x09CC),
    (0x0A03, 0x0A03),
    (0x0A3E, 0x0A40),
    (0x0BBF, 0x0BBF),
    (0x0BC1, 0x0BC2),
    (0x0BC6, 0x0BC8),
    (0x0BCA, 0x0BCC),
    (0x0C01, 0x0C03),
    (0x0D02, 0x0D03),
    (0x0D3F, 0x0D40),
    (0x0D46, 0x0D48),
    (0x0D4A, 0x0D4C),
    (0x0E33, 0x0E33),
    (0x0EB3, 0x0EB3),
    (0x1031, 0x1031),
    (0x103B, 0x103C),
    (0x17B6, 0x17B6),
    (0x17BE, 0x17C5),
    (0x17C7, 0x17C8),
];

/// Format controls other than ZWNJ and ZWJ, which segment differently.
pub(super) const FORMAT_CONTROLS: &[(u32, u32)] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200E, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
];

/// Pictographic scalars that participate in emoji joining.
///
/// Skin-tone modifiers (1F3FB..1F3FF) are excluded; they extend.
pub(super) const EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F200, 0x1F2FF),
    (0x1F300, 0x1F3FA),
    (0x1F400, 0x1F6FF),
    (0x1F700, 0x1FAFF),
];

/// Regional indicator symbols (flag halves).
pub(super) const REGIONAL_INDICATORS: (u32, u32) = (0x1F1E6, 0x1F1FF);

/// Hangul jamo blocks.
pub(super) const HANGUL_L: &[(u32, u32)] = &[(0x1100, 0x115F), (0xA960, 0xA97C)];
pub(super) const HANGUL_V: &[(u32, u32)] = &[(0x1160, 0x11A7), (0xD7B0, 0xD7C6)];
pub(super) const HANGUL_T: &[(u32, u32)] = &[(0x11A8, 0x11FF), (0xD7CB, 0xD7FB)];

/// Precomposed Hangul syllables; LV/LVT membership is arithmetic.
pub(super) const HANGUL_SYLLABLES: (u32, u32) = (0xAC00, 0xD7A3);

/// Whether a precomposed syllable is of LV shape (no trailing consonant).
pub(super) fn hangul_syllable_is_lv(cp: u32) -> bool {
    (cp - HANGUL_SYLLABLES.0) % 28 == 0
}

/// Whether `cp` is a precomposed Hangul syllable.
pub(super) fn is_hangul_syllable(cp: u32) -> bool {
    (HANGUL_SYLLABLES.0..=HANGUL_SYLLABLES.1).contains(&cp)
}
