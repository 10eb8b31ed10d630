//! Puzzle flags recording cross-room progress.
//!
//! Flags start false, are only ever raised, and form a precedence DAG that
//! [`PuzzleFlag::prerequisites`] spells out.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

macro_rules! passcode {
    () => {
        "1-9-7-3"
    };
}
pub(crate) use passcode;

/// Passcode revealed by playing the security tape.
pub const PASSCODE: &str = passcode!();

/// A named progress flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleFlag {
    /// The security monitors are powered.
    SecurityMonitor,
    /// The security tape has been watched.
    TapePlayed,
    /// The drawer passcode is known.
    PasswordRevealed,
    /// The ward drawer has been opened.
    DrawerOpened,
    /// The emergency light is installed over the morgue hatch.
    ExitReady,
    /// The escape key sits in the hatch lock.
    EscapeKeyInserted,
}

impl PuzzleFlag {
    /// Every flag in dependency order.
    pub const ALL: [PuzzleFlag; 6] = [
        PuzzleFlag::SecurityMonitor,
        PuzzleFlag::TapePlayed,
        PuzzleFlag::PasswordRevealed,
        PuzzleFlag::DrawerOpened,
        PuzzleFlag::ExitReady,
        PuzzleFlag::EscapeKeyInserted,
    ];

    /// Flags that must already be set before this one may be raised.
    pub fn prerequisites(self) -> &'static [PuzzleFlag] {
        match self {
            PuzzleFlag::SecurityMonitor | PuzzleFlag::ExitReady => &[],
            PuzzleFlag::TapePlayed => &[PuzzleFlag::SecurityMonitor],
            PuzzleFlag::PasswordRevealed => &[PuzzleFlag::TapePlayed],
            PuzzleFlag::DrawerOpened => &[PuzzleFlag::PasswordRevealed],
            PuzzleFlag::EscapeKeyInserted => &[PuzzleFlag::ExitReady, PuzzleFlag::DrawerOpened],
        }
    }
}

/// The set of raised flags for one playthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PuzzleState {
    raised: BTreeSet<PuzzleFlag>,
}

impl PuzzleState {
    /// All flags false.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a flag has been raised.
    pub fn is_set(&self, flag: PuzzleFlag) -> bool {
        self.raised.contains(&flag)
    }

    /// Raise a flag. Returns true if it was not already set.
    pub fn set(&mut self, flag: PuzzleFlag) -> bool {
        self.raised.insert(flag)
    }

    /// Whether every prerequisite of `flag` is raised.
    pub fn prerequisites_met(&self, flag: PuzzleFlag) -> bool {
        flag.prerequisites().iter().all(|&p| self.is_set(p))
    }

    /// Each flag paired with its current value.
    pub fn iter(&self) -> impl Iterator<Item = (PuzzleFlag, bool)> + '_ {
        PuzzleFlag::ALL.into_iter().map(|f| (f, self.is_set(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_false() {
        let state = PuzzleState::new();
        assert!(state.iter().all(|(_, v)| !v));
    }

    #[test]
    fn set_is_one_way() {
        let mut state = PuzzleState::new();
        assert!(state.set(PuzzleFlag::SecurityMonitor));
        assert!(!state.set(PuzzleFlag::SecurityMonitor));
        assert!(state.is_set(PuzzleFlag::SecurityMonitor));
    }

    #[test]
    fn prerequisites_chain() {
        let mut state = PuzzleState::new();
        assert!(state.prerequisites_met(PuzzleFlag::SecurityMonitor));
        assert!(!state.prerequisites_met(PuzzleFlag::TapePlayed));

        state.set(PuzzleFlag::SecurityMonitor);
        assert!(state.prerequisites_met(PuzzleFlag::TapePlayed));
        assert!(!state.prerequisites_met(PuzzleFlag::PasswordRevealed));
    }

    #[test]
    fn key_insertion_needs_both_branches() {
        let mut state = PuzzleState::new();
        state.set(PuzzleFlag::ExitReady);
        assert!(!state.prerequisites_met(PuzzleFlag::EscapeKeyInserted));
        state.set(PuzzleFlag::DrawerOpened);
        assert!(state.prerequisites_met(PuzzleFlag::EscapeKeyInserted));
    }

    #[test]
    fn dependency_graph_is_acyclic() {
        // ALL is listed in dependency order, so every prerequisite comes first.
        for (i, flag) in PuzzleFlag::ALL.iter().enumerate() {
            for pre in flag.prerequisites() {
                let j = PuzzleFlag::ALL.iter().position(|f| f == pre).unwrap();
                assert!(j < i, "{flag:?} depends on later flag {pre:?}");
            }
        }
    }
}
