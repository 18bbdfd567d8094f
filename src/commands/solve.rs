//! Solving commands
//!
//! Lists candidates for a target given a feedback history, or lets the
//! solver play a puzzle on its own and returns the solution path.

use crate::core::Feedback;
use crate::puzzles::Puzzle;
use crate::solver::{MAX_LENGTH, Solver};

/// Configuration for listing candidates
pub struct SolveConfig {
    pub target: i64,
    pub length: usize,
    pub history: Vec<(String, Feedback)>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: i64) -> Self {
        Self {
            target,
            length: 6,
            history: Vec::new(),
        }
    }

    /// Add a history entry written as `GUESS:FEEDBACK` (e.g. `5*2+10:YYYYYY`)
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is malformed or the feedback does not
    /// match the guess length.
    pub fn push_history(&mut self, entry: &str) -> Result<(), String> {
        let (guess, pattern) = entry
            .split_once(':')
            .ok_or_else(|| format!("History entry '{entry}' must look like GUESS:FEEDBACK"))?;
        let feedback: Feedback = pattern.parse()?;

        if feedback.len() != guess.chars().count() {
            return Err(format!(
                "Feedback '{pattern}' does not match the length of '{guess}'"
            ));
        }

        self.history.push((guess.to_string(), feedback));
        Ok(())
    }
}

/// Candidates remaining for a target
pub struct CandidatesResult {
    pub target: i64,
    pub total: usize,
    pub candidates: Vec<String>,
    pub suggestion: Option<String>,
}

/// List the candidates consistent with the configured history
///
/// # Errors
///
/// Returns an error if the length is zero or longer than the solver searches.
pub fn list_candidates(config: &SolveConfig) -> Result<CandidatesResult, String> {
    check_length(config.length)?;

    let solver = Solver::new(config.target, config.length);
    let candidates = solver.get_candidates(&config.history);

    Ok(CandidatesResult {
        target: config.target,
        total: solver.count_candidates(&[]),
        suggestion: crate::solver::suggest(&candidates).map(str::to_string),
        candidates: candidates.into_iter().map(str::to_string).collect(),
    })
}

fn check_length(length: usize) -> Result<(), String> {
    if length == 0 || length > MAX_LENGTH {
        return Err(format!(
            "Length {length} is out of range, the solver handles 1 to {MAX_LENGTH} tiles"
        ));
    }
    Ok(())
}

/// Result of the solver playing a puzzle
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub puzzle: Puzzle,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Let the solver play a puzzle
///
/// # Errors
///
/// Returns an error if `max_guesses` is zero, the puzzle is longer than the
/// solver searches, or the solver runs out of candidates (the puzzle's
/// solution is not among the enumerated expressions).
pub fn autoplay(puzzle: &Puzzle, max_guesses: usize) -> Result<SolveResult, String> {
    if max_guesses == 0 {
        return Err("Max guesses must be at least 1".to_string());
    }
    check_length(puzzle.len())?;

    let solver = Solver::for_puzzle(puzzle);

    let mut history: Vec<(String, Feedback)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..max_guesses {
        let candidates_before = solver.count_candidates(&history);

        let guess = solver
            .next_guess(&history)
            .ok_or_else(|| "No candidates remaining".to_string())?
            .to_string();

        let feedback = Feedback::calculate(&guess, puzzle.solution()).map_err(|e| e.to_string())?;
        history.push((guess.clone(), feedback.clone()));

        let candidates_after = solver.count_candidates(&history);
        let solved = feedback.is_perfect();

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                puzzle: puzzle.clone(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        puzzle: puzzle.clone(),
    })
}
