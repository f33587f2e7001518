//! Word break classes
//!
//! The alphabet folds Hebrew_Letter into ALetter and the quote classes
//! into the Mid* classes: U+0027 and U+2019 classify MidNumLet so that
//! apostrophes hold words together the way the pre-quote-class tailoring
//! did.

use super::{extend_with, ranges, ClassTable, RangeEntry};
use crate::classes::WordClass as W;
use crate::error::Result;

const ALETTER: &[(u32, u32)] = &[
    (0x0041, 0x005A),
    (0x0061, 0x007A),
    (0x00AA, 0x00AA),
    (0x00B5, 0x00B5),
    (0x00BA, 0x00BA),
    (0x00C0, 0x00D6),
    (0x00D8, 0x00F6),
    (0x00F8, 0x02C1),
    (0x02C6, 0x02D1),
    (0x0370, 0x0373),
    (0x0376, 0x0377),
    (0x037A, 0x037D),
    (0x037F, 0x037F),
    (0x0386, 0x0386),
    (0x0388, 0x03F5),
    (0x03F7, 0x03FF),
    (0x0400, 0x0481),
    (0x048A, 0x052F),
    (0x0531, 0x0556),
    (0x0559, 0x0559),
    (0x0561, 0x0587),
    (0x05D0, 0x05EA),
    (0x05F0, 0x05F2),
    (0x0620, 0x064A),
    (0x066E, 0x066F),
    (0x0671, 0x06D3),
    (0x06D5, 0x06D5),
    (0x06E5, 0x06E6),
    (0x06EE, 0x06EF),
    (0x06FA, 0x06FC),
    (0x06FF, 0x06FF),
    (0x0710, 0x0710),
    (0x0712, 0x072F),
    (0x074D, 0x07A5),
    (0x07B1, 0x07B1),
    (0x0904, 0x0939),
    (0x093D, 0x093D),
    (0x0950, 0x0950),
    (0x0958, 0x0961),
    (0x0971, 0x097F),
    (0x10A0, 0x10C5),
    (0x10D0, 0x10FA),
    (0x1E00, 0x1FBC),
    (0x1FC2, 0x1FCC),
    (0x1FD0, 0x1FDB),
    (0x1FE0, 0x1FEC),
    (0x1FF2, 0x1FFC),
    (0x2071, 0x2071),
    (0x207F, 0x207F),
    (0xFF21, 0xFF3A),
    (0xFF41, 0xFF5A),
];

const NUMERIC: &[(u32, u32)] = &[
    (0x0030, 0x0039),
    (0x0660, 0x0669),
    (0x066B, 0x066B),
    (0x06F0, 0x06F9),
    (0x0966, 0x096F),
    (0xFF10, 0xFF19),
];

const MID_LETTER: &[(u32, u32)] = &[
    (0x003A, 0x003A),
    (0x00B7, 0x00B7),
    (0x0387, 0x0387),
    (0x05F4, 0x05F4),
    (0x2027, 0x2027),
    (0xFE13, 0xFE13),
    (0xFE55, 0xFE55),
    (0xFF1A, 0xFF1A),
];

const MID_NUM: &[(u32, u32)] = &[
    (0x002C, 0x002C),
    (0x003B, 0x003B),
    (0x037E, 0x037E),
    (0x066C, 0x066C),
    (0xFE10, 0xFE10),
    (0xFE14, 0xFE14),
    (0xFE50, 0xFE50),
    (0xFE54, 0xFE54),
    (0xFF0C, 0xFF0C),
    (0xFF1B, 0xFF1B),
];

const MID_NUM_LET: &[(u32, u32)] = &[
    (0x0027, 0x0027),
    (0x002E, 0x002E),
    (0x2019, 0x2019),
    (0x2024, 0x2024),
    (0xFE52, 0xFE52),
    (0xFF07, 0xFF07),
    (0xFF0E, 0xFF0E),
];

const EXTEND_NUM_LET: &[(u32, u32)] = &[
    (0x005F, 0x005F),
    (0x202F, 0x202F),
    (0x203F, 0x2040),
    (0x2054, 0x2054),
    (0xFE33, 0xFE34),
    (0xFE4D, 0xFE4F),
    (0xFF3F, 0xFF3F),
];

const KATAKANA: &[(u32, u32)] = &[
    (0x3031, 0x3035),
    (0x309B, 0x309C),
    (0x30A0, 0x30FA),
    (0x30FC, 0x30FF),
    (0x31F0, 0x31FF),
    (0xFF66, 0xFF9D),
];

const WSEGSPACE: &[(u32, u32)] = &[
    (0x0020, 0x0020),
    (0x1680, 0x1680),
    (0x2000, 0x2006),
    (0x2008, 0x200A),
    (0x205F, 0x205F),
    (0x3000, 0x3000),
];

const NEWLINE: &[(u32, u32)] = &[(0x000B, 0x000C), (0x0085, 0x0085), (0x2028, 0x2029)];

pub(crate) fn table() -> Result<ClassTable> {
    let mut entries: Vec<RangeEntry> = vec![
        (0x0D, 0x0D, W::Cr.id()),
        (0x0A, 0x0A, W::Lf.id()),
        (0x200D, 0x200D, W::Zwj.id()),
        (
            ranges::REGIONAL_INDICATORS.0,
            ranges::REGIONAL_INDICATORS.1,
            W::RegionalIndicator.id(),
        ),
        (
            ranges::HANGUL_SYLLABLES.0,
            ranges::HANGUL_SYLLABLES.1,
            W::ALetter.id(),
        ),
    ];
    extend_with(&mut entries, NEWLINE, W::Newline.id());
    extend_with(&mut entries, ALETTER, W::ALetter.id());
    extend_with(&mut entries, ranges::HANGUL_L, W::ALetter.id());
    extend_with(&mut entries, ranges::HANGUL_V, W::ALetter.id());
    extend_with(&mut entries, ranges::HANGUL_T, W::ALetter.id());
    extend_with(&mut entries, NUMERIC, W::Numeric.id());
    extend_with(&mut entries, MID_LETTER, W::MidLetter.id());
    extend_with(&mut entries, MID_NUM, W::MidNum.id());
    extend_with(&mut entries, MID_NUM_LET, W::MidNumLet.id());
    extend_with(&mut entries, EXTEND_NUM_LET, W::ExtendNumLet.id());
    extend_with(&mut entries, KATAKANA, W::Katakana.id());
    extend_with(&mut entries, WSEGSPACE, W::WSegSpace.id());
    extend_with(&mut entries, ranges::EXTEND_MARKS, W::Extend.id());
    extend_with(&mut entries, ranges::SPACING_MARKS, W::Extend.id());
    extend_with(&mut entries, ranges::FORMAT_CONTROLS, W::Format.id());
    extend_with(
        &mut entries,
        ranges::EXTENDED_PICTOGRAPHIC,
        W::ExtendedPictographic.id(),
    );
    ClassTable::from_entries(entries, W::COUNT)
}
