//! Rule tables: ordered, first-match-wins break rules
//!
//! Each boundary kind ships a static table of [`Rule`]s. A rule matches a
//! candidate position when the effective class on the left and the raw class
//! on the right both fall in the rule's masks and its context check (if any)
//! passes. The first matching rule decides the position; a validated
//! catch-all final rule guarantees every position is decided.

use crate::classes::BoundaryKind;
use crate::error::{Error, Result};

pub(crate) mod grapheme;
pub(crate) mod line;
pub(crate) mod sentence;
pub(crate) mod word;

/// A set of break classes, one bit per class id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClassMask(u32);

impl ClassMask {
    pub(crate) const EMPTY: ClassMask = ClassMask(0);

    pub(crate) const fn from_bits(bits: u32) -> Self {
        ClassMask(bits)
    }

    /// Mask covering every id below `len`.
    pub(crate) const fn all(len: usize) -> Self {
        if len >= 32 {
            ClassMask(u32::MAX)
        } else {
            ClassMask((1u32 << len) - 1)
        }
    }

    pub(crate) const fn with(self, id: u8) -> Self {
        ClassMask(self.0 | (1 << id))
    }

    pub(crate) const fn union(self, other: ClassMask) -> Self {
        ClassMask(self.0 | other.0)
    }

    pub(crate) const fn without(self, other: ClassMask) -> Self {
        ClassMask(self.0 & !other.0)
    }

    pub(crate) const fn contains(self, id: u8) -> bool {
        id < 32 && self.0 & (1 << id) != 0
    }

    pub(crate) const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub(crate) const fn is_subset_of(self, other: ClassMask) -> bool {
        self.0 & !other.0 == 0
    }
}

/// What a matched rule does with the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleAction {
    /// The position is a boundary.
    Break,
    /// The position is not a boundary.
    NoBreak,
    /// Defer to the sentence terminator resolver, which may read ahead.
    Lookahead,
}

/// Extra condition consulted after the left/right masks match.
///
/// Checks read scanner state (effective-run history, emoji flags, space
/// runs) or scan the class slice around the position; none of them mutate.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ContextCheck {
    /// The raw class of the scalar immediately left of the position is in
    /// the mask, ignoring any effective-class absorption.
    LeftScalarIn(ClassMask),
    /// The current left run is a single scalar and the effective class
    /// preceding it is in the mask. Implements the one-medial-sign rules:
    /// `a:b` joins but `a::b` does not.
    PrevEffectiveIn(ClassMask),
    /// The next non-ignorable class strictly right of the position is in
    /// the mask.
    NextEffectiveIn(ClassMask),
    /// The current effective run has odd length and its class is in the
    /// mask. Implements regional-indicator pairing.
    OddRunIn(ClassMask),
    /// The scalar before the joiner is part of an emoji sequence (an
    /// extended-pictographic base followed only by extend characters).
    EmojiJoiner,
    /// The position follows a run of spaces and the last non-space
    /// effective class before the run is in the mask.
    BeforeSpacesIn(ClassMask),
}

/// One break rule: masks, optional context check, and an action.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    /// Rule identifier surfaced in diagnostics and table-validation errors.
    pub(crate) name: &'static str,
    /// Effective classes admitted on the left of the position.
    pub(crate) left: ClassMask,
    /// Raw classes admitted on the right of the position.
    pub(crate) right: ClassMask,
    pub(crate) check: Option<ContextCheck>,
    pub(crate) action: RuleAction,
}

impl Rule {
    pub(crate) const fn new(
        name: &'static str,
        left: ClassMask,
        right: ClassMask,
        action: RuleAction,
    ) -> Self {
        Rule {
            name,
            left,
            right,
            check: None,
            action,
        }
    }

    pub(crate) const fn when(mut self, check: ContextCheck) -> Self {
        self.check = Some(check);
        self
    }
}

/// Per-kind scanner knobs that are not expressible as rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KindProfile {
    /// Classes absorbed into the preceding scalar's effective class.
    pub(crate) ignore: ClassMask,
    /// Left classes an ignorable never attaches to (separators and spaces).
    pub(crate) no_attach_after: ClassMask,
    /// Effective class assumed for an ignorable with nothing to attach to.
    /// `None` leaves the ignorable's own class in effect.
    pub(crate) orphan_fallback: Option<u8>,
    /// The space class skipped over by [`ContextCheck::BeforeSpacesIn`].
    pub(crate) space: Option<u8>,
    /// Class ids feeding the emoji-sequence flags, where the kind has them.
    pub(crate) emoji: Option<EmojiIds>,
    /// Whether [`RuleAction::Lookahead`] rules are admitted.
    pub(crate) allows_lookahead: bool,
}

/// Class ids the scanner tracks for emoji zwj sequences.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmojiIds {
    pub(crate) ext_pic: u8,
    pub(crate) joiner: u8,
    pub(crate) extend: u8,
}

/// A kind's complete rule set plus its scanner profile.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleTable {
    pub(crate) kind: BoundaryKind,
    pub(crate) rules: &'static [Rule],
    pub(crate) profile: KindProfile,
}

impl RuleTable {
    /// Checks totality and internal consistency. Every table is validated
    /// once when break data is assembled; scans assume a valid table.
    pub(crate) fn validate(&self, alphabet_len: usize) -> Result<()> {
        let fail = |msg: String| Err(Error::InvalidTable(msg));
        if alphabet_len > 32 {
            return fail(format!("{} alphabet exceeds 32 classes", self.kind));
        }
        let full = ClassMask::all(alphabet_len);
        let Some(last) = self.rules.last() else {
            return fail(format!("{} rule table is empty", self.kind));
        };

        for rule in self.rules {
            let bad = |what: &str| fail(format!("{} rule {}: {what}", self.kind, rule.name));
            if rule.left.is_empty() || rule.right.is_empty() {
                return bad("empty class mask");
            }
            if !rule.left.is_subset_of(full) || !rule.right.is_subset_of(full) {
                return bad("mask outside the class alphabet");
            }
            if matches!(rule.action, RuleAction::Lookahead) && !self.profile.allows_lookahead {
                return bad("lookahead action not supported for this kind");
            }
            match rule.check {
                Some(
                    ContextCheck::LeftScalarIn(mask)
                    | ContextCheck::PrevEffectiveIn(mask)
                    | ContextCheck::NextEffectiveIn(mask)
                    | ContextCheck::OddRunIn(mask)
                    | ContextCheck::BeforeSpacesIn(mask),
                ) => {
                    if mask.is_empty() || !mask.is_subset_of(full) {
                        return bad("context mask outside the class alphabet");
                    }
                    if matches!(rule.check, Some(ContextCheck::BeforeSpacesIn(_)))
                        && self.profile.space.is_none()
                    {
                        return bad("space-run check without a space class");
                    }
                }
                Some(ContextCheck::EmojiJoiner) => {
                    if self.profile.emoji.is_none() {
                        return bad("emoji check without emoji classes");
                    }
                }
                None => {}
            }
        }

        if last.left != full || last.right != full || last.check.is_some() {
            return fail(format!(
                "{} rule table has no catch-all final rule",
                self.kind
            ));
        }
        if matches!(last.action, RuleAction::Lookahead) {
            return fail(format!("{} catch-all rule cannot defer", self.kind));
        }

        let p = &self.profile;
        if !p.ignore.is_subset_of(full) || !p.no_attach_after.is_subset_of(full) {
            return fail(format!("{} profile mask outside the class alphabet", self.kind));
        }
        for id in [p.orphan_fallback, p.space] {
            if id.is_some_and(|id| usize::from(id) >= alphabet_len) {
                return fail(format!("{} profile class outside the alphabet", self.kind));
            }
        }
        if let Some(emoji) = p.emoji {
            for id in [emoji.ext_pic, emoji.joiner, emoji.extend] {
                if usize::from(id) >= alphabet_len {
                    return fail(format!("{} emoji class outside the alphabet", self.kind));
                }
            }
        }
        Ok(())
    }
}
