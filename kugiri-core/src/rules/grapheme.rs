//! Grapheme cluster boundary rules (extended grapheme clusters)

use super::{ClassMask, ContextCheck, EmojiIds, KindProfile, Rule, RuleAction, RuleTable};
use crate::classes::{BoundaryKind, GraphemeClass as G};

const fn m(classes: &[G]) -> ClassMask {
    let mut mask = ClassMask::EMPTY;
    let mut i = 0;
    while i < classes.len() {
        mask = mask.with(classes[i].id());
        i += 1;
    }
    mask
}

const ANY: ClassMask = ClassMask::all(G::COUNT);
const SEPARATOR: ClassMask = m(&[G::Control, G::Cr, G::Lf]);

static RULES: &[Rule] = &[
    // Keep CR LF together, then break around every other control.
    Rule::new("crlf", m(&[G::Cr]), m(&[G::Lf]), RuleAction::NoBreak),
    Rule::new("after-control", SEPARATOR, ANY, RuleAction::Break),
    Rule::new("before-control", ANY, SEPARATOR, RuleAction::Break),
    // Hangul jamo compose into syllables.
    Rule::new(
        "hangul-l",
        m(&[G::HangulL]),
        m(&[G::HangulL, G::HangulV, G::HangulLv, G::HangulLvt]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "hangul-v",
        m(&[G::HangulLv, G::HangulV]),
        m(&[G::HangulV, G::HangulT]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "hangul-t",
        m(&[G::HangulLvt, G::HangulT]),
        m(&[G::HangulT]),
        RuleAction::NoBreak,
    ),
    // Marks and joiners extend the cluster; prepends bind forward.
    Rule::new("extend", ANY, m(&[G::Extend, G::Zwj]), RuleAction::NoBreak),
    Rule::new("spacing-mark", ANY, m(&[G::SpacingMark]), RuleAction::NoBreak),
    Rule::new("prepend", m(&[G::Prepend]), ANY, RuleAction::NoBreak),
    // Emoji zwj sequence: the joiner glues only when it follows a
    // pictographic base (plus any extend characters).
    Rule::new(
        "emoji-zwj",
        m(&[G::Zwj]),
        m(&[G::ExtendedPictographic]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::EmojiJoiner),
    // Flags pair up: glue only within an odd run of regional indicators.
    Rule::new(
        "flag-pair",
        m(&[G::RegionalIndicator]),
        m(&[G::RegionalIndicator]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::OddRunIn(m(&[G::RegionalIndicator]))),
    Rule::new("any", ANY, ANY, RuleAction::Break),
];

pub(crate) fn table() -> RuleTable {
    RuleTable {
        kind: BoundaryKind::Grapheme,
        rules: RULES,
        profile: KindProfile {
            ignore: ClassMask::EMPTY,
            no_attach_after: ClassMask::EMPTY,
            orphan_fallback: None,
            space: None,
            emoji: Some(EmojiIds {
                ext_pic: G::ExtendedPictographic.id(),
                joiner: G::Zwj.id(),
                extend: G::Extend.id(),
            }),
            allows_lookahead: false,
        },
    }
}
