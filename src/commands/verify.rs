//! Puzzle list verification
//!
//! Checks every entry of a puzzle list: the solution must be a valid,
//! normalized expression that evaluates exactly to its target.

use crate::puzzles::{Puzzle, PuzzleError};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// An entry that failed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    /// 1-based position in the list
    pub index: usize,
    pub target: i64,
    pub solution: String,
    pub error: PuzzleError,
}

/// Statistics from verifying a puzzle list
#[derive(Debug)]
pub struct VerifyStatistics {
    pub total: usize,
    pub valid: usize,
    pub invalid: Vec<InvalidEntry>,
    /// Solution length -> number of valid puzzles
    pub length_distribution: FxHashMap<usize, usize>,
    /// Solutions that appear more than once, with their count
    pub duplicates: Vec<(String, usize)>,
    pub duration: Duration,
}

impl VerifyStatistics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.duplicates.is_empty()
    }
}

/// Verify every `(target, solution)` entry
#[must_use]
pub fn run_verify<S: AsRef<str> + Sync>(
    entries: &[(i64, S)],
    show_progress: bool,
) -> VerifyStatistics {
    let start = Instant::now();

    let pb = if show_progress {
        progress_bar(entries.len())
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<Result<Puzzle, InvalidEntry>> = entries
        .par_iter()
        .enumerate()
        .map(|(i, (target, solution))| {
            let solution = solution.as_ref();
            let result = Puzzle::new(*target, solution).map_err(|error| InvalidEntry {
                index: i + 1,
                target: *target,
                solution: solution.to_string(),
                error,
            });
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut length_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut occurrences: FxHashMap<&str, usize> = FxHashMap::default();
    let mut invalid = Vec::new();

    for result in &results {
        match result {
            Ok(puzzle) => {
                *length_distribution.entry(puzzle.len()).or_insert(0) += 1;
                *occurrences.entry(puzzle.solution()).or_insert(0) += 1;
            }
            Err(entry) => invalid.push(entry.clone()),
        }
    }

    let mut duplicates: Vec<(String, usize)> = occurrences
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(solution, count)| (solution.to_string(), count))
        .collect();
    duplicates.sort();

    let stats = VerifyStatistics {
        total: entries.len(),
        valid: entries.len() - invalid.len(),
        invalid,
        length_distribution,
        duplicates,
        duration: start.elapsed(),
    };

    log::info!(
        "Verified {} puzzles: {} valid, {} invalid, {} duplicated",
        stats.total,
        stats.valid,
        stats.invalid.len(),
        stats.duplicates.len()
    );

    stats
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_list() {
        let entries = [(20, "10+5*2"), (42, "50-8*1"), (4, "9-3-2")];
        let stats = run_verify(&entries, false);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.valid, 3);
        assert!(stats.is_clean());
        assert_eq!(stats.length_distribution.get(&6), Some(&2));
        assert_eq!(stats.length_distribution.get(&5), Some(&1));
    }

    #[test]
    fn reports_invalid_entries_with_position() {
        let entries = [(20, "10+5*2"), (21, "10+5*2"), (5, "1++4"), (1, "01")];
        let stats = run_verify(&entries, false);

        assert_eq!(stats.valid, 1);
        let indices: Vec<usize> = stats.invalid.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
        assert!(matches!(
            stats.invalid[0].error,
            PuzzleError::WrongValue { target: 21, .. }
        ));
        assert!(matches!(
            stats.invalid[1].error,
            PuzzleError::InvalidExpression(_)
        ));
        assert!(matches!(
            stats.invalid[2].error,
            PuzzleError::NotNormalized { .. }
        ));
    }

    #[test]
    fn reports_duplicates() {
        let entries = vec![
            (20, "10+5*2".to_string()),
            (20, "10+5*2".to_string()),
            (4, "9-3-2".to_string()),
        ];
        let stats = run_verify(&entries, false);

        assert_eq!(stats.valid, 3);
        assert_eq!(stats.duplicates, vec![("10+5*2".to_string(), 2)]);
        assert!(!stats.is_clean());
    }

    #[test]
    fn empty_list() {
        let entries: [(i64, &str); 0] = [];
        let stats = run_verify(&entries, false);
        assert_eq!(stats.total, 0);
        assert!(stats.is_clean());
    }
}
