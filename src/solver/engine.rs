//! Solver assistant
//!
//! Narrows the space of possible solutions using the feedback already
//! received and suggests the next guess.

use super::enumerate::enumerate;
use crate::core::Feedback;
use crate::puzzles::Puzzle;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Candidate tracker for one target and row length
pub struct Solver {
    target: i64,
    length: usize,
    candidates: Vec<String>,
}

impl Solver {
    /// Build the full candidate set for a target
    #[must_use]
    pub fn new(target: i64, length: usize) -> Self {
        Self {
            target,
            length,
            candidates: enumerate(target, length),
        }
    }

    #[must_use]
    pub fn for_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(puzzle.target(), puzzle.len())
    }

    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Get the next best guess given previous guesses and feedback
    ///
    /// Returns `None` if no candidate is consistent with the history.
    #[must_use]
    pub fn next_guess(&self, history: &[(String, Feedback)]) -> Option<&str> {
        suggest(&self.get_candidates(history))
    }

    /// Candidates that reproduce every observed feedback
    #[must_use]
    pub fn get_candidates(&self, history: &[(String, Feedback)]) -> Vec<&str> {
        filter_candidates(&self.candidates, history)
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count_candidates(&self, history: &[(String, Feedback)]) -> usize {
        self.get_candidates(history).len()
    }
}

/// Filter candidates to those consistent with the guess history
///
/// A candidate survives if scoring each past guess against it yields
/// exactly the feedback that was observed.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &'a [String],
    history: &[(String, Feedback)],
) -> Vec<&'a str> {
    candidates
        .par_iter()
        .filter(|candidate| {
            history.iter().all(|(guess, observed)| {
                Feedback::calculate(guess, candidate).is_ok_and(|f| f == *observed)
            })
        })
        .map(String::as_str)
        .collect()
}

/// Pick the candidate with the most distinct characters
///
/// Ties go to the earliest candidate.
#[must_use]
pub fn suggest<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .min_by_key(|c| std::cmp::Reverse(c.chars().collect::<FxHashSet<_>>().len()))
}
