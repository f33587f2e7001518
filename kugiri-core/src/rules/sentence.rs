//! Sentence boundary rules and the abbreviation suppression table

use std::collections::HashSet;

use super::{ClassMask, ContextCheck, KindProfile, Rule, RuleAction, RuleTable};
use crate::classes::{BoundaryKind, SentenceClass as S};
use crate::error::{Error, Result};

const fn m(classes: &[S]) -> ClassMask {
    let mut mask = ClassMask::EMPTY;
    let mut i = 0;
    while i < classes.len() {
        mask = mask.with(classes[i].id());
        i += 1;
    }
    mask
}

const ANY: ClassMask = ClassMask::all(S::COUNT);
const SEPARATORS: ClassMask = m(&[S::Sep, S::Cr, S::Lf]);
const IGNORABLE: ClassMask = m(&[S::Extend, S::Format]);

static RULES: &[Rule] = &[
    Rule::new("crlf", m(&[S::Cr]), m(&[S::Lf]), RuleAction::NoBreak),
    Rule::new("after-separator", SEPARATORS, ANY, RuleAction::Break),
    Rule::new(
        "glue-ignorable",
        ANY.without(SEPARATORS),
        IGNORABLE,
        RuleAction::NoBreak,
    ),
    // A period directly followed by a digit is never a full stop.
    Rule::new(
        "number-period",
        m(&[S::ATerm]),
        m(&[S::Numeric]),
        RuleAction::NoBreak,
    ),
    // Initials: a cased letter before the period, an upper-case letter
    // after it.
    Rule::new("initials", m(&[S::ATerm]), m(&[S::Upper]), RuleAction::NoBreak)
        .when(ContextCheck::PrevEffectiveIn(m(&[S::Upper, S::Lower]))),
    // Everything after a terminator, its trailing closers, and its trailing
    // spaces goes through the terminator resolver.
    Rule::new(
        "terminator-context",
        m(&[S::ATerm, S::STerm, S::Close, S::Sp]),
        ANY,
        RuleAction::Lookahead,
    ),
    Rule::new("any", ANY, ANY, RuleAction::NoBreak),
];

pub(crate) fn table() -> RuleTable {
    RuleTable {
        kind: BoundaryKind::Sentence,
        rules: RULES,
        profile: KindProfile {
            ignore: IGNORABLE,
            no_attach_after: SEPARATORS,
            orphan_fallback: None,
            space: None,
            emoji: None,
            allows_lookahead: true,
        },
    }
}

/// Abbreviations whose trailing period never ends a sentence.
///
/// Entries are matched case-sensitively against the text immediately before
/// a period, so `"Mr"` suppresses the break in `"Mr. Smith"` but not in
/// `"mr. smith"`. A trailing period on an entry is dropped at build time;
/// interior periods are kept (`"e.g"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suppressions {
    words: HashSet<String>,
    max_len: usize,
}

impl Suppressions {
    /// No suppressions: every terminator is eligible to end a sentence.
    pub fn empty() -> Self {
        Suppressions::default()
    }

    /// Builds a table from abbreviation entries.
    ///
    /// Entries must be non-empty after dropping one trailing period and may
    /// only contain alphanumeric characters and interior periods; anything
    /// else could never match adjacent text and is rejected as a
    /// configuration error.
    pub fn from_words<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut table = Suppressions::default();
        for word in words {
            let mut word = word.into();
            if word.ends_with('.') {
                word.truncate(word.len() - 1);
            }
            if word.is_empty() {
                return Err(Error::Config("empty suppression entry".into()));
            }
            if let Some(bad) = word.chars().find(|c| !c.is_alphanumeric() && *c != '.') {
                return Err(Error::Config(format!(
                    "suppression entry {word:?} contains unmatchable character {bad:?}"
                )));
            }
            table.max_len = table.max_len.max(word.chars().count());
            table.words.insert(word);
        }
        Ok(table)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test for a canonical entry (no trailing period).
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Whether the text ending at `terminator_start` (the byte offset of a
    /// period scalar in `content`) ends with a suppressed abbreviation.
    pub(crate) fn matches_at(&self, content: &str, terminator_start: usize) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let head = &content[..terminator_start];
        // Collect the run of word characters before the period, newest
        // first. The window holds one scalar more than the longest entry;
        // a candidate's delimiting period can sit in that last slot.
        let mut window_start = terminator_start;
        let mut truncated = false;
        let mut taken = 0;
        for (idx, ch) in head.char_indices().rev() {
            if !ch.is_alphanumeric() && ch != '.' {
                break;
            }
            if taken > self.max_len {
                truncated = true;
                break;
            }
            window_start = idx;
            taken += 1;
        }
        if window_start == terminator_start {
            return false;
        }
        let window = &head[window_start..];
        // The whole run counts only when it was not cut short mid-word.
        if !truncated && self.words.contains(window) {
            return true;
        }
        // Interior periods open shorter candidates: "banana.No." still
        // matches the entry "No".
        window.match_indices('.').any(|(dot, _)| {
            let candidate = &window[dot + 1..];
            !candidate.is_empty() && self.words.contains(candidate)
        })
    }
}
