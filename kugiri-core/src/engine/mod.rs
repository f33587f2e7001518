//! The boundary scanner
//!
//! Decides every position between adjacent scalars, left to right, by
//! running the kind's rule table over the classified stream. Decisions are
//! final: emitted boundaries are never retracted, and a scan can stop after
//! any boundary and resume later from a [`ScanCheckpoint`].

use crate::error::{Error, Result};
use crate::rules::sentence::Suppressions;
use crate::rules::{ContextCheck, RuleAction, RuleTable};

mod term;

use term::TermState;

/// Progress of one (text, kind) scan.
#[derive(Debug, Clone)]
pub(crate) enum ScanState {
    /// Nothing decided yet.
    AtStart,
    /// Mid-text, resumable at the checkpoint.
    Scanning(ScanCheckpoint),
    /// The final boundary has been emitted.
    AtEnd,
    /// The scan failed; the error is replayed on further use.
    Failed(Error),
}

/// Resumable scanner state: everything the rules may consult about the
/// already-consumed left side, as plain data.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScanCheckpoint {
    /// Next position to decide; all scalars below it are consumed.
    pos: usize,
    /// Effective class of the current left run.
    eff: Option<u8>,
    /// Scalars in the current run, absorbed ignorables not counted.
    run_len: usize,
    /// Effective class of the run before the current one.
    prev_eff: Option<u8>,
    /// Most recent effective class other than the kind's space class.
    last_non_space: Option<u8>,
    /// The consumed text ends in a pictographic base plus extends.
    emoji_base: bool,
    /// The last consumed scalar is a joiner armed by an emoji base.
    joiner_armed: bool,
    term: TermState,
}

/// One in-flight scan over a classified text.
///
/// Borrows the class slice and rule table; all mutable state lives in the
/// embedded checkpoint so callers can persist it between boundaries.
pub(crate) struct Scanner<'a> {
    table: &'a RuleTable,
    suppressions: &'a Suppressions,
    content: &'a str,
    classes: &'a [u8],
    starts: &'a [usize],
    state: ScanCheckpoint,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        table: &'a RuleTable,
        suppressions: &'a Suppressions,
        content: &'a str,
        classes: &'a [u8],
        starts: &'a [usize],
        state: ScanCheckpoint,
    ) -> Self {
        Scanner {
            table,
            suppressions,
            content,
            classes,
            starts,
            state,
        }
    }

    pub(crate) fn checkpoint(&self) -> ScanCheckpoint {
        self.state
    }

    /// Scans forward to the next boundary strictly after the last one.
    ///
    /// The implicit start-of-text boundary is the caller's; this yields
    /// interior boundaries in increasing scalar order, then the end-of-text
    /// position, then `None`.
    pub(crate) fn next_boundary(&mut self) -> Result<Option<usize>> {
        let n = self.classes.len();
        if self.state.pos > n {
            return Ok(None);
        }
        if n == 0 {
            self.state.pos = n + 1;
            return Ok(None);
        }
        if self.state.pos == 0 {
            self.consume(0);
            self.state.pos = 1;
        }
        while self.state.pos < n {
            let at = self.state.pos;
            let action = self.decide(at)?;
            self.consume(at);
            self.state.pos = at + 1;
            if matches!(action, RuleAction::Break) {
                return Ok(Some(at));
            }
        }
        self.state.pos = n + 1;
        Ok(Some(n))
    }

    /// First matching rule wins. Table validation guarantees a match.
    fn decide(&self, at: usize) -> Result<RuleAction> {
        let kind = self.table.kind;
        let Some(left) = self.state.eff else {
            return Err(Error::EngineFault {
                kind,
                reason: format!("position {at} decided before any scalar"),
            });
        };
        let right = self.classes[at];
        for rule in self.table.rules {
            if !rule.left.contains(left) || !rule.right.contains(right) {
                continue;
            }
            if let Some(check) = rule.check {
                if !self.check(check, at) {
                    continue;
                }
            }
            match rule.action {
                RuleAction::Lookahead => {
                    if let Some(action) = term::resolve(
                        &self.state.term,
                        self.classes,
                        at,
                        self.content,
                        self.starts,
                        self.suppressions,
                    ) {
                        return Ok(action);
                    }
                }
                action => return Ok(action),
            }
        }
        Err(Error::EngineFault {
            kind,
            reason: format!("no rule covers classes {left}/{right} at position {at}"),
        })
    }

    fn check(&self, check: ContextCheck, at: usize) -> bool {
        match check {
            ContextCheck::LeftScalarIn(mask) => mask.contains(self.classes[at - 1]),
            ContextCheck::PrevEffectiveIn(mask) => {
                self.state.run_len == 1
                    && self.state.prev_eff.is_some_and(|class| mask.contains(class))
            }
            ContextCheck::NextEffectiveIn(mask) => {
                let ignore = self.table.profile.ignore;
                self.classes[at + 1..]
                    .iter()
                    .find(|&&class| !ignore.contains(class))
                    .is_some_and(|&class| mask.contains(class))
            }
            ContextCheck::OddRunIn(mask) => {
                self.state.run_len % 2 == 1
                    && self.state.eff.is_some_and(|class| mask.contains(class))
            }
            ContextCheck::EmojiJoiner => self.state.joiner_armed,
            ContextCheck::BeforeSpacesIn(mask) => self
                .state
                .last_non_space
                .is_some_and(|class| mask.contains(class)),
        }
    }

    /// Folds scalar `at` into the checkpoint.
    fn consume(&mut self, at: usize) {
        let profile = &self.table.profile;
        let class = self.classes[at];
        let absorbed = profile.ignore.contains(class)
            && self
                .state
                .eff
                .is_some_and(|left| !profile.no_attach_after.contains(left));
        if !absorbed {
            let eff = if profile.ignore.contains(class) {
                // An ignorable with nothing to attach to stands alone.
                profile.orphan_fallback.unwrap_or(class)
            } else {
                class
            };
            if self.state.eff == Some(eff) {
                self.state.run_len += 1;
            } else {
                self.state.prev_eff = self.state.eff;
                self.state.eff = Some(eff);
                self.state.run_len = 1;
            }
            if profile.space != Some(eff) {
                self.state.last_non_space = Some(eff);
            }
        }
        if let Some(emoji) = profile.emoji {
            if class == emoji.ext_pic {
                self.state.emoji_base = true;
                self.state.joiner_armed = false;
            } else if class == emoji.extend {
                self.state.joiner_armed = false;
            } else if class == emoji.joiner {
                self.state.joiner_armed = self.state.emoji_base;
                self.state.emoji_base = false;
            } else {
                self.state.emoji_base = false;
                self.state.joiner_armed = false;
            }
        }
        if profile.allows_lookahead && !absorbed {
            self.state.term.observe(class, at);
        }
    }
}
