//! Sentence break classes

use super::{extend_with, ranges, ClassTable, RangeEntry};
use crate::classes::SentenceClass as S;
use crate::error::Result;

const SP: &[(u32, u32)] = &[
    (0x0009, 0x0009),
    (0x0020, 0x0020),
    (0x00A0, 0x00A0),
    (0x1680, 0x1680),
    (0x2000, 0x200A),
    (0x202F, 0x202F),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

const LOWER: &[(u32, u32)] = &[
    (0x0061, 0x007A),
    (0x00AA, 0x00AA),
    (0x00B5, 0x00B5),
    (0x00BA, 0x00BA),
    (0x00DF, 0x00F6),
    (0x00F8, 0x00FF),
    (0x03AC, 0x03CE),
    (0x0430, 0x045F),
    (0x0561, 0x0587),
];

const UPPER: &[(u32, u32)] = &[
    (0x0041, 0x005A),
    (0x00C0, 0x00D6),
    (0x00D8, 0x00DE),
    (0x0386, 0x0386),
    (0x0388, 0x038F),
    (0x0391, 0x03AB),
    (0x0400, 0x042F),
    (0x0531, 0x0556),
];

const OLETTER: &[(u32, u32)] = &[
    (0x05D0, 0x05EA),
    (0x05F0, 0x05F2),
    (0x0620, 0x064A),
    (0x066E, 0x066F),
    (0x0671, 0x06D3),
    (0x0904, 0x0939),
    (0x093D, 0x093D),
    (0x0950, 0x0950),
    (0x0958, 0x0961),
    (0x0971, 0x097F),
    (0x0E01, 0x0E30),
    (0x0E32, 0x0E32),
    (0x3041, 0x3096),
    (0x30A1, 0x30FA),
    (0x30FC, 0x30FF),
    (0x3105, 0x312F),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0xFF66, 0xFF9D),
];

const NUMERIC: &[(u32, u32)] = &[
    (0x0030, 0x0039),
    (0x0660, 0x0669),
    (0x066B, 0x066C),
    (0x06F0, 0x06F9),
    (0x0966, 0x096F),
    (0xFF10, 0xFF19),
];

const ATERM: &[(u32, u32)] = &[
    (0x002E, 0x002E),
    (0x2024, 0x2024),
    (0xFE52, 0xFE52),
    (0xFF0E, 0xFF0E),
];

const STERM: &[(u32, u32)] = &[
    (0x0021, 0x0021),
    (0x003F, 0x003F),
    (0x0589, 0x0589),
    (0x061E, 0x061F),
    (0x06D4, 0x06D4),
    (0x0964, 0x0965),
    (0x2047, 0x2049),
    (0x3002, 0x3002),
    (0xFE56, 0xFE57),
    (0xFF01, 0xFF01),
    (0xFF1F, 0xFF1F),
    (0xFF61, 0xFF61),
];

const CLOSE: &[(u32, u32)] = &[
    (0x0022, 0x0022),
    (0x0027, 0x0027),
    (0x0028, 0x0029),
    (0x005B, 0x005B),
    (0x005D, 0x005D),
    (0x007B, 0x007B),
    (0x007D, 0x007D),
    (0x00AB, 0x00AB),
    (0x00BB, 0x00BB),
    (0x2018, 0x201F),
    (0x2039, 0x203A),
    (0x3008, 0x3011),
    (0x3014, 0x301B),
    (0xFF08, 0xFF09),
    (0xFF3B, 0xFF3B),
    (0xFF3D, 0xFF3D),
    (0xFF5B, 0xFF5B),
    (0xFF5D, 0xFF5D),
    (0xFF62, 0xFF63),
];

const SCONTINUE: &[(u32, u32)] = &[
    (0x002C, 0x002D),
    (0x003A, 0x003A),
    (0x055D, 0x055D),
    (0x060C, 0x060D),
    (0x07F8, 0x07F8),
    (0x1802, 0x1802),
    (0x1808, 0x1808),
    (0x2013, 0x2014),
    (0x3001, 0x3001),
    (0xFE10, 0xFE11),
    (0xFF0C, 0xFF0D),
    (0xFF1A, 0xFF1A),
    (0xFF64, 0xFF64),
];

pub(crate) fn table() -> Result<ClassTable> {
    let mut entries: Vec<RangeEntry> = vec![
        (0x0D, 0x0D, S::Cr.id()),
        (0x0A, 0x0A, S::Lf.id()),
        (0x85, 0x85, S::Sep.id()),
        (0x2028, 0x2029, S::Sep.id()),
        (0x200D, 0x200D, S::Extend.id()),
        (
            ranges::HANGUL_SYLLABLES.0,
            ranges::HANGUL_SYLLABLES.1,
            S::OLetter.id(),
        ),
    ];
    extend_with(&mut entries, SP, S::Sp.id());
    extend_with(&mut entries, LOWER, S::Lower.id());
    extend_with(&mut entries, UPPER, S::Upper.id());
    extend_with(&mut entries, OLETTER, S::OLetter.id());
    extend_with(&mut entries, ranges::HANGUL_L, S::OLetter.id());
    extend_with(&mut entries, ranges::HANGUL_V, S::OLetter.id());
    extend_with(&mut entries, ranges::HANGUL_T, S::OLetter.id());
    extend_with(&mut entries, NUMERIC, S::Numeric.id());
    extend_with(&mut entries, ATERM, S::ATerm.id());
    extend_with(&mut entries, STERM, S::STerm.id());
    extend_with(&mut entries, CLOSE, S::Close.id());
    extend_with(&mut entries, SCONTINUE, S::SContinue.id());
    extend_with(&mut entries, ranges::EXTEND_MARKS, S::Extend.id());
    extend_with(&mut entries, ranges::SPACING_MARKS, S::Extend.id());
    extend_with(&mut entries, ranges::FORMAT_CONTROLS, S::Format.id());
    ClassTable::from_entries(entries, S::COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(c: char) -> u8 {
        table().unwrap().classify(u32::from(c))
    }

    #[test]
    fn test_core_classes() {
        assert_eq!(classify('.'), S::ATerm.id());
        assert_eq!(classify('!'), S::STerm.id());
        assert_eq!(classify('?'), S::STerm.id());
        assert_eq!(classify('。'), S::STerm.id());
        assert_eq!(classify(')'), S::Close.id());
        assert_eq!(classify('"'), S::Close.id());
        assert_eq!(classify(','), S::SContinue.id());
        assert_eq!(classify(' '), S::Sp.id());
        assert_eq!(classify('\t'), S::Sp.id());
        assert_eq!(classify('a'), S::Lower.id());
        assert_eq!(classify('A'), S::Upper.id());
        assert_eq!(classify('あ'), S::OLetter.id());
        assert_eq!(classify('漢'), S::OLetter.id());
        assert_eq!(classify('5'), S::Numeric.id());
        assert_eq!(classify('\u{2028}'), S::Sep.id());
        assert_eq!(classify('\u{0301}'), S::Extend.id());
    }
}
