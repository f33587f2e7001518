//! Line-break opportunity rules
//!
//! Follows the ordered pair-table reading of the standard rules, restricted
//! to the classes in [`crate::classes::LineClass`]. Folding SY into IS also
//! routes slash-joined words through the infix rule, so "a/b" holds
//! together; folding NS and the small-kana classes into ID drops the
//! strictest CJK kinsoku distinctions.

use super::{ClassMask, ContextCheck, KindProfile, Rule, RuleAction, RuleTable};
use crate::classes::{BoundaryKind, LineClass as L};

const fn m(classes: &[L]) -> ClassMask {
    let mut mask = ClassMask::EMPTY;
    let mut i = 0;
    while i < classes.len() {
        mask = mask.with(classes[i].id());
        i += 1;
    }
    mask
}

const ANY: ClassMask = ClassMask::all(L::COUNT);
/// Classes a combining mark never attaches to.
const GLUE_BARRIERS: ClassMask = m(&[L::Bk, L::Cr, L::Lf, L::Sp, L::Zw]);
/// `Other` rides along with AL wherever AL appears.
const ALPHABETIC: ClassMask = m(&[L::Al, L::Other]);
const JAMO: ClassMask = m(&[L::Jl, L::Jv, L::Jt, L::H2, L::H3]);

static RULES: &[Rule] = &[
    // Mandatory breaks and the characters that force them.
    Rule::new("after-forced", m(&[L::Bk]), ANY, RuleAction::Break),
    Rule::new("crlf", m(&[L::Cr]), m(&[L::Lf]), RuleAction::NoBreak),
    Rule::new("after-newline", m(&[L::Cr, L::Lf]), ANY, RuleAction::Break),
    Rule::new(
        "before-forced",
        ANY,
        m(&[L::Bk, L::Cr, L::Lf]),
        RuleAction::NoBreak,
    ),
    Rule::new("before-space", ANY, m(&[L::Sp, L::Zw]), RuleAction::NoBreak),
    Rule::new("after-zero-width", m(&[L::Zw]), ANY, RuleAction::Break),
    Rule::new("zero-width-space-run", m(&[L::Sp]), ANY, RuleAction::Break)
        .when(ContextCheck::BeforeSpacesIn(m(&[L::Zw]))),
    // The joiner suppresses the break no matter what follows it.
    Rule::new("zwj-glue", ANY, ANY, RuleAction::NoBreak)
        .when(ContextCheck::LeftScalarIn(m(&[L::Zwj]))),
    Rule::new(
        "combining-glue",
        ANY.without(GLUE_BARRIERS),
        m(&[L::Cm, L::Zwj]),
        RuleAction::NoBreak,
    ),
    Rule::new("before-word-joiner", ANY, m(&[L::Wj]), RuleAction::NoBreak),
    Rule::new("after-word-joiner", m(&[L::Wj]), ANY, RuleAction::NoBreak),
    Rule::new("after-glue", m(&[L::Gl]), ANY, RuleAction::NoBreak),
    Rule::new(
        "before-glue",
        ANY.without(m(&[L::Sp, L::Ba, L::Hy])),
        m(&[L::Gl]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "before-closer",
        ANY,
        m(&[L::Cl, L::Ex, L::Is]),
        RuleAction::NoBreak,
    ),
    Rule::new("after-opener", m(&[L::Op]), ANY, RuleAction::NoBreak),
    Rule::new("opener-space", m(&[L::Sp]), ANY, RuleAction::NoBreak)
        .when(ContextCheck::BeforeSpacesIn(m(&[L::Op]))),
    Rule::new("quote-opener", m(&[L::Qu]), m(&[L::Op]), RuleAction::NoBreak),
    Rule::new("quote-space-opener", m(&[L::Sp]), m(&[L::Op]), RuleAction::NoBreak)
        .when(ContextCheck::BeforeSpacesIn(m(&[L::Qu]))),
    Rule::new("after-space", m(&[L::Sp]), ANY, RuleAction::Break),
    Rule::new("before-quote", ANY, m(&[L::Qu]), RuleAction::NoBreak),
    Rule::new("after-quote", m(&[L::Qu]), ANY, RuleAction::NoBreak),
    Rule::new(
        "before-hyphen",
        ANY,
        m(&[L::Ba, L::Hy]),
        RuleAction::NoBreak,
    ),
    Rule::new("after-bb", m(&[L::Bb]), ANY, RuleAction::NoBreak),
    Rule::new("letter-digit", ALPHABETIC, m(&[L::Nu]), RuleAction::NoBreak),
    Rule::new("digit-letter", m(&[L::Nu]), ALPHABETIC, RuleAction::NoBreak),
    Rule::new("prefix-ideograph", m(&[L::Pr]), m(&[L::Id]), RuleAction::NoBreak),
    Rule::new("ideograph-postfix", m(&[L::Id]), m(&[L::Po]), RuleAction::NoBreak),
    Rule::new("affix-letter", m(&[L::Pr, L::Po]), ALPHABETIC, RuleAction::NoBreak),
    Rule::new("letter-affix", ALPHABETIC, m(&[L::Pr, L::Po]), RuleAction::NoBreak),
    // Numeric expressions: "$(12.35)" and "10,000%" stay whole.
    Rule::new("close-affix", m(&[L::Cl]), m(&[L::Po, L::Pr]), RuleAction::NoBreak),
    Rule::new(
        "digit-affix",
        m(&[L::Nu]),
        m(&[L::Po, L::Pr, L::Nu]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "affix-digit",
        m(&[L::Po, L::Pr]),
        m(&[L::Op, L::Nu]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "hyphen-digit",
        m(&[L::Hy, L::Is]),
        m(&[L::Nu]),
        RuleAction::NoBreak,
    ),
    // Hangul syllables, conjoining or precomposed.
    Rule::new(
        "jamo-lead",
        m(&[L::Jl]),
        m(&[L::Jl, L::Jv, L::H2, L::H3]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "jamo-vowel",
        m(&[L::Jv, L::H2]),
        m(&[L::Jv, L::Jt]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "jamo-trail",
        m(&[L::Jt, L::H3]),
        m(&[L::Jt]),
        RuleAction::NoBreak,
    ),
    Rule::new("hangul-postfix", JAMO, m(&[L::Po]), RuleAction::NoBreak),
    Rule::new("prefix-hangul", m(&[L::Pr]), JAMO, RuleAction::NoBreak),
    Rule::new("letter-letter", ALPHABETIC, ALPHABETIC, RuleAction::NoBreak),
    Rule::new("separator-letter", m(&[L::Is]), ALPHABETIC, RuleAction::NoBreak),
    Rule::new(
        "word-opener",
        m(&[L::Al, L::Other, L::Nu]),
        m(&[L::Op]),
        RuleAction::NoBreak,
    ),
    Rule::new(
        "flag-pair",
        m(&[L::RegionalIndicator]),
        m(&[L::RegionalIndicator]),
        RuleAction::NoBreak,
    )
    .when(ContextCheck::OddRunIn(m(&[L::RegionalIndicator]))),
    Rule::new("any", ANY, ANY, RuleAction::Break),
];

pub(crate) fn table() -> RuleTable {
    RuleTable {
        kind: BoundaryKind::Line,
        rules: RULES,
        profile: KindProfile {
            ignore: m(&[L::Cm, L::Zwj]),
            no_attach_after: GLUE_BARRIERS,
            orphan_fallback: Some(L::Al.id()),
            space: Some(L::Sp.id()),
            emoji: None,
            allows_lookahead: false,
        },
    }
}
