//! Sentence terminator resolution
//!
//! The sentence rule table funnels every position after a terminator, its
//! trailing closers, and its trailing spaces into [`resolve`]. The phase
//! tracker keeps the scan single-pass on the consumed side; only the
//! unconsumed right side is read ahead, and only through the class slice.

use crate::classes::SentenceClass as S;
use crate::rules::sentence::Suppressions;
use crate::rules::RuleAction;

/// Where the consumed text sits inside a `terminator closers* spaces*`
/// pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum TermPhase {
    #[default]
    Idle,
    /// A terminator was just consumed.
    Terminated,
    /// Closing punctuation directly after the terminator.
    CloseRun,
    /// Spaces after the terminator and any closers.
    SpaceRun,
}

/// Phase tracker for the active terminator pattern.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct TermState {
    phase: TermPhase,
    /// True for a period-like terminator, which needs disambiguation;
    /// false for a hard terminator.
    ambiguous: bool,
    /// Scalar index of the terminator that opened the pattern.
    terminator: usize,
}

impl TermState {
    /// Folds one consumed scalar into the phase machine. Absorbed
    /// ignorables never reach this.
    pub(super) fn observe(&mut self, class: u8, at: usize) {
        let Some(class) = S::from_id(class) else {
            self.phase = TermPhase::Idle;
            return;
        };
        self.phase = match (class, self.phase) {
            (S::ATerm, _) => {
                self.ambiguous = true;
                self.terminator = at;
                TermPhase::Terminated
            }
            (S::STerm, _) => {
                self.ambiguous = false;
                self.terminator = at;
                TermPhase::Terminated
            }
            (S::Close, TermPhase::Terminated | TermPhase::CloseRun) => TermPhase::CloseRun,
            (S::Sp, TermPhase::Terminated | TermPhase::CloseRun | TermPhase::SpaceRun) => {
                TermPhase::SpaceRun
            }
            _ => TermPhase::Idle,
        };
    }
}

/// Decides a deferred position, or `None` when no terminator pattern is
/// active and the remaining rules should decide instead.
pub(super) fn resolve(
    state: &TermState,
    classes: &[u8],
    at: usize,
    content: &str,
    starts: &[usize],
    suppressions: &Suppressions,
) -> Option<RuleAction> {
    if state.phase == TermPhase::Idle {
        return None;
    }
    let right = S::from_id(classes[at])?;
    match right {
        // The pattern keeps growing: closers directly after the
        // terminator, spaces anywhere, and a trailing separator (which
        // then breaks on its own).
        S::Close if matches!(state.phase, TermPhase::Terminated | TermPhase::CloseRun) => {
            Some(RuleAction::NoBreak)
        }
        S::Sp | S::Sep | S::Cr | S::Lf => Some(RuleAction::NoBreak),
        // Another terminator or an explicit continuation sign keeps the
        // sentence open.
        S::SContinue | S::ATerm | S::STerm => Some(RuleAction::NoBreak),
        _ if state.ambiguous => {
            if suppressions.matches_at(content, starts[state.terminator]) {
                return Some(RuleAction::NoBreak);
            }
            Some(lowercase_continues(classes, at))
        }
        _ => Some(RuleAction::Break),
    }
}

/// A period-like terminator stays inside the sentence when the next word
/// starts lowercase. The scan skips anything that cannot start a sentence
/// and stops at the first decisive class.
fn lowercase_continues(classes: &[u8], at: usize) -> RuleAction {
    for &class in &classes[at..] {
        match S::from_id(class) {
            Some(S::Lower) => return RuleAction::NoBreak,
            Some(S::OLetter | S::Upper | S::Sep | S::Cr | S::Lf | S::ATerm | S::STerm) => break,
            _ => continue,
        }
    }
    RuleAction::Break
}
