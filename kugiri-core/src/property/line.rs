//! Line break classes
//!
//! A deliberate subset of the full line-breaking property. Folds applied:
//! CP joins CL, SY joins IS, NL joins BK, B2/NS/CJ/IN/EM have no class of
//! their own (they land in BA, ID, EX, or CM as behavior dictates), and
//! the South-East Asian classes resolve to AL. Scalars outside every range
//! classify `Other`, which the rules treat exactly like AL.

use super::{extend_with, ranges, ClassTable, RangeEntry};
use crate::classes::LineClass as L;
use crate::error::Result;

const MANDATORY: &[(u32, u32)] = &[(0x000B, 0x000C), (0x0085, 0x0085), (0x2028, 0x2029)];

/// C0/C1 controls glue to the preceding character.
const CONTROL_CM: &[(u32, u32)] = &[
    (0x0000, 0x0008),
    (0x000E, 0x001F),
    (0x007F, 0x0084),
    (0x0086, 0x009F),
    (0x200E, 0x200F),
    (0x202A, 0x202E),
    (0x2066, 0x206F),
];

const GLUE: &[(u32, u32)] = &[
    (0x00A0, 0x00A0),
    (0x2007, 0x2007),
    (0x2011, 0x2011),
    (0x202F, 0x202F),
];

const OPEN: &[(u32, u32)] = &[
    (0x0028, 0x0028),
    (0x005B, 0x005B),
    (0x007B, 0x007B),
    (0x00A1, 0x00A1),
    (0x00BF, 0x00BF),
    (0x3008, 0x3008),
    (0x300A, 0x300A),
    (0x300C, 0x300C),
    (0x300E, 0x300E),
    (0x3010, 0x3010),
    (0x3014, 0x3014),
    (0x3016, 0x3016),
    (0x3018, 0x3018),
    (0x301A, 0x301A),
    (0xFF08, 0xFF08),
    (0xFF3B, 0xFF3B),
    (0xFF5B, 0xFF5B),
    (0xFF62, 0xFF62),
];

const CLOSE: &[(u32, u32)] = &[
    (0x0029, 0x0029),
    (0x005D, 0x005D),
    (0x007D, 0x007D),
    (0x3001, 0x3002),
    (0x3009, 0x3009),
    (0x300B, 0x300B),
    (0x300D, 0x300D),
    (0x300F, 0x300F),
    (0x3011, 0x3011),
    (0x3015, 0x3015),
    (0x3017, 0x3017),
    (0x3019, 0x3019),
    (0x301B, 0x301B),
    (0xFF09, 0xFF09),
    (0xFF0C, 0xFF0C),
    (0xFF0E, 0xFF0E),
    (0xFF3D, 0xFF3D),
    (0xFF5D, 0xFF5D),
    (0xFF61, 0xFF61),
    (0xFF63, 0xFF64),
];

const QUOTE: &[(u32, u32)] = &[
    (0x0022, 0x0022),
    (0x0027, 0x0027),
    (0x00AB, 0x00AB),
    (0x00BB, 0x00BB),
    (0x2018, 0x201F),
    (0x2039, 0x203A),
    (0x301D, 0x301F),
];

const EXCLAMATION: &[(u32, u32)] = &[
    (0x0021, 0x0021),
    (0x003F, 0x003F),
    (0x061E, 0x061F),
    (0x06D4, 0x06D4),
    (0x2024, 0x2026),
    (0xFF01, 0xFF01),
    (0xFF1F, 0xFF1F),
];

const BREAK_AFTER: &[(u32, u32)] = &[
    (0x0009, 0x0009),
    (0x007C, 0x007C),
    (0x00AD, 0x00AD),
    (0x0964, 0x0965),
    (0x2000, 0x2006),
    (0x2008, 0x200A),
    (0x2010, 0x2010),
    (0x2012, 0x2014),
    (0x2027, 0x2027),
    (0x205F, 0x205F),
];

const BREAK_BEFORE: &[(u32, u32)] = &[(0x00B4, 0x00B4), (0x02C8, 0x02C8), (0x02CC, 0x02CC)];

const INFIX_SEP: &[(u32, u32)] = &[
    (0x002C, 0x002C),
    (0x002E, 0x002F),
    (0x003A, 0x003B),
    (0x037E, 0x037E),
    (0x0589, 0x0589),
];

const NUMERIC: &[(u32, u32)] = &[
    (0x0030, 0x0039),
    (0x0660, 0x0669),
    (0x066B, 0x066C),
    (0x06F0, 0x06F9),
    (0x0966, 0x096F),
];

const PREFIX: &[(u32, u32)] = &[
    (0x0024, 0x0024),
    (0x002B, 0x002B),
    (0x005C, 0x005C),
    (0x00A3, 0x00A5),
    (0x00B1, 0x00B1),
    (0x20A0, 0x20BF),
];

const POSTFIX: &[(u32, u32)] = &[
    (0x0025, 0x0025),
    (0x00A2, 0x00A2),
    (0x00B0, 0x00B0),
    (0x2030, 0x2034),
    (0x2103, 0x2103),
    (0xFF05, 0xFF05),
];

const ALPHABETIC: &[(u32, u32)] = &[
    (0x0023, 0x0023),
    (0x0026, 0x0026),
    (0x002A, 0x002A),
    (0x003C, 0x003E),
    (0x0040, 0x005A),
    (0x005E, 0x007A),
    (0x007E, 0x007E),
    (0x00A6, 0x00AA),
    (0x00AC, 0x00AC),
    (0x00AE, 0x00AF),
    (0x00B2, 0x00B3),
    (0x00B5, 0x00BA),
    (0x00BC, 0x00BE),
    (0x00C0, 0x02C7),
    (0x02C9, 0x02CB),
    (0x02CD, 0x02FF),
    (0x0370, 0x037D),
    (0x037F, 0x0482),
    (0x048A, 0x0588),
    (0x05D0, 0x05F4),
    (0x0620, 0x064A),
    (0x066D, 0x066F),
    (0x0671, 0x06D3),
    (0x06D5, 0x06D5),
    (0x06EE, 0x06EF),
    (0x06FA, 0x06FF),
    (0x0904, 0x0939),
    (0x093D, 0x093D),
    (0x0950, 0x0950),
    (0x0958, 0x0961),
    (0x0970, 0x097F),
    (0x0E01, 0x0E30),
    (0x0E32, 0x0E32),
    (0x0E40, 0x0E46),
    (0x10A0, 0x10FF),
    (0x1E00, 0x1FFF),
];

const IDEOGRAPH: &[(u32, u32)] = &[
    (0x2E80, 0x2FFF),
    (0x3000, 0x3000),
    (0x3003, 0x3007),
    (0x3012, 0x3013),
    (0x301C, 0x301C),
    (0x3020, 0x3029),
    (0x3030, 0x303F),
    (0x3041, 0x3096),
    (0x309B, 0x30FF),
    (0x3105, 0x312F),
    (0x3130, 0x318F),
    (0x31F0, 0x31FF),
    (0x3200, 0x33FF),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xA000, 0xA4CF),
    (0xF900, 0xFAFF),
    (0xFF10, 0xFF19),
    (0xFF21, 0xFF3A),
    (0xFF41, 0xFF5A),
    (0xFF65, 0xFF9F),
    (0x1F000, 0x1F0FF),
    (0x1F200, 0x1F2FF),
    (0x1F300, 0x1F3FA),
    (0x1F400, 0x1F6FF),
    (0x1F700, 0x1FAFF),
];

pub(crate) fn table() -> Result<ClassTable> {
    let mut entries: Vec<RangeEntry> = vec![
        (0x0D, 0x0D, L::Cr.id()),
        (0x0A, 0x0A, L::Lf.id()),
        (0x20, 0x20, L::Sp.id()),
        (0x2D, 0x2D, L::Hy.id()),
        (0x200B, 0x200B, L::Zw.id()),
        (0x200D, 0x200D, L::Zwj.id()),
        (0x2060, 0x2060, L::Wj.id()),
        (0xFEFF, 0xFEFF, L::Wj.id()),
        (
            ranges::REGIONAL_INDICATORS.0,
            ranges::REGIONAL_INDICATORS.1,
            L::RegionalIndicator.id(),
        ),
    ];
    extend_with(&mut entries, MANDATORY, L::Bk.id());
    extend_with(&mut entries, CONTROL_CM, L::Cm.id());
    extend_with(&mut entries, GLUE, L::Gl.id());
    extend_with(&mut entries, OPEN, L::Op.id());
    extend_with(&mut entries, CLOSE, L::Cl.id());
    extend_with(&mut entries, QUOTE, L::Qu.id());
    extend_with(&mut entries, EXCLAMATION, L::Ex.id());
    extend_with(&mut entries, BREAK_AFTER, L::Ba.id());
    extend_with(&mut entries, BREAK_BEFORE, L::Bb.id());
    extend_with(&mut entries, INFIX_SEP, L::Is.id());
    extend_with(&mut entries, NUMERIC, L::Nu.id());
    extend_with(&mut entries, PREFIX, L::Pr.id());
    extend_with(&mut entries, POSTFIX, L::Po.id());
    extend_with(&mut entries, ALPHABETIC, L::Al.id());
    extend_with(&mut entries, IDEOGRAPH, L::Id.id());
    extend_with(&mut entries, ranges::EXTEND_MARKS, L::Cm.id());
    extend_with(&mut entries, ranges::SPACING_MARKS, L::Cm.id());
    extend_with(&mut entries, ranges::HANGUL_L, L::Jl.id());
    extend_with(&mut entries, ranges::HANGUL_V, L::Jv.id());
    extend_with(&mut entries, ranges::HANGUL_T, L::Jt.id());
    ClassTable::from_entries(entries, L::COUNT)
}

/// Precomposed syllables: LV shapes are H2, LVT shapes are H3.
pub(crate) fn syllable_class(cp: u32) -> Option<u8> {
    if !ranges::is_hangul_syllable(cp) {
        return None;
    }
    Some(if ranges::hangul_syllable_is_lv(cp) {
        L::H2.id()
    } else {
        L::H3.id()
    })
}
