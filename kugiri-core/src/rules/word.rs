//! Word boundary rules

use super::{ClassMask, ContextCheck, KindProfile, Rule, RuleAction, RuleTable};
use crate::classes::{BoundaryKind, WordClass as W};

const fn m(classes: &[W]) -> ClassMask {
    let mut mask = ClassMask::EMPTY;
    let mut i = 0;
    while i < classes.len() {
        mask = mask.with(classes[i].id());
        i += 1;
    }
    mask
}

const ANY: ClassMask = ClassMask::all(W::COUNT);
const NEWLINES: ClassMask = m(&[W::Newline, W::Cr, W::Lf]);
const IGNORABLE: ClassMask = m(&[W::Extend, W::Format, W::Zwj]);
const MID_LETTERISH: ClassMask = m(&[W::MidLetter, W::MidNumLet]);
const MID_NUMERICISH: ClassMask = m(&[W::MidNum, W::MidNumLet]);

static RULES: &[Rule] = &[
    Rule::new("crlf", m(&[W::Cr]), m(&[W::Lf]), RuleAction::NoBreak),
    Rule::new("after-newline", NEWLINES, ANY, RuleAction::Break),
    Rule::new("before-newline", ANY, NEWLINES, RuleAction::Break),
    // The left of an emoji zwj position reads as the joiner's base after
    // absorption, so the joiner itself is matched on the raw scalar.
    Rule::new(
        "zwj-pictographic",
        ANY,
        m(&[W::ExtendedPictographic]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::LeftScalarIn(m(&[W::Zwj]))),
    // Segment-space runs stay whole only when strictly adjacent.
    Rule::new(
        "segment-space",
        m(&[W::WSegSpace]),
        m(&[W::WSegSpace]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::LeftScalarIn(m(&[W::WSegSpace]))),
    Rule::new(
        "glue-ignorable",
        ANY.without(NEWLINES),
        IGNORABLE,
        RuleAction::NoBreak,
    ),
    Rule::new(
        "letter-letter",
        m(&[W::ALetter]),
        m(&[W::ALetter]),
        RuleAction::NoBreak,
    ),
    // Letters joined by a medial mark, both directions.
    Rule::new(
        "letter-mid",
        m(&[W::ALetter]),
        MID_LETTERISH,
        RuleAction::NoBreak,
    )
    .when(ContextCheck::NextEffectiveIn(m(&[W::ALetter]))),
    Rule::new(
        "mid-letter",
        MID_LETTERISH,
        m(&[W::ALetter]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::PrevEffectiveIn(m(&[W::ALetter]))),
    Rule::new(
        "digit-digit",
        m(&[W::Numeric]),
        m(&[W::Numeric]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "letter-digit",
        m(&[W::ALetter]),
        m(&[W::Numeric]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "digit-letter",
        m(&[W::Numeric]),
        m(&[W::ALetter]),
        RuleAction::NoBreak,
    ),
    // Digits joined by a numeric separator, both directions.
    Rule::new(
        "mid-digit",
        MID_NUMERICISH,
        m(&[W::Numeric]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::PrevEffectiveIn(m(&[W::Numeric]))),
    Rule::new(
        "digit-mid",
        m(&[W::Numeric]),
        MID_NUMERICISH,
        RuleAction::NoBreak,
    )
    .when(ContextCheck::NextEffectiveIn(m(&[W::Numeric]))),
    Rule::new(
        "katakana",
        m(&[W::Katakana]),
        m(&[W::Katakana]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "extender-join",
        m(&[W::ALetter, W::Numeric, W::Katakana, W::ExtendNumLet]),
        m(&[W::ExtendNumLet]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "extender-resume",
        m(&[W::ExtendNumLet]),
        m(&[W::ALetter, W::Numeric, W::Katakana]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "flag-pair",
        m(&[W::RegionalIndicator]),
        m(&[W::RegionalIndicator]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::OddRunIn(m(&[W::RegionalIndicator]))),
    Rule::new("any", ANY, ANY, RuleAction::Break),
];

pub(crate) fn table() -> RuleTable {
    RuleTable {
        kind: BoundaryKind::Word,
        rules: RULES,
        profile: KindProfile {
            ignore: IGNORABLE,
            no_attach_after: NEWLINES,
            orphan_fallback: None,
            space: None,
            emoji: None,
            allows_lookahead: false,
        },
    }
}
