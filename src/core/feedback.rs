//! Guess scoring and tile feedback
//!
//! A guess is scored against the solution position by position:
//! - Correct = same character at the same position
//! - Present = character appears elsewhere and an unmatched copy remains
//! - Absent = no unmatched copy of the character remains
//!
//! Exact matches claim their characters before any present/absent decision
//! is made, so duplicates are never over-credited.

use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileStatus {
    /// Unfilled display position (never produced by scoring)
    Empty,
    Absent,
    Present,
    Correct,
}

impl TileStatus {
    /// Emoji used when sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Single ASCII letter form (`G`, `Y`, `-`, `.`)
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => '.',
        }
    }

    /// Parse a scored tile from its letter or emoji form
    ///
    /// `Empty` is not accepted since feedback never contains it.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error returned when a guess cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Guess and solution differ in character count
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, solution } => write!(
                f,
                "Guess has {guess} characters but the solution has {solution}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score a guess against the solution
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the strings differ in length.
///
/// # Examples
/// ```
/// use numble::core::{TileStatus::*, score};
///
/// let tiles = score("11+1*2", "12+1*2").unwrap();
/// assert_eq!(tiles, vec![Correct, Absent, Correct, Correct, Correct, Correct]);
/// ```
pub fn score(guess: &str, solution: &str) -> Result<Vec<TileStatus>, ScoreError> {
    let guess: Vec<char> = guess.chars().collect();
    let solution: Vec<char> = solution.chars().collect();

    if guess.len() != solution.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            solution: solution.len(),
        });
    }

    let mut result = vec![TileStatus::Absent; guess.len()];
    let mut available = char_counts(&solution);

    // First pass: exact matches claim their characters
    for (i, (g, s)) in guess.iter().zip(&solution).enumerate() {
        if g == s {
            result[i] = TileStatus::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced characters take from what is left
    for (i, g) in guess.iter().enumerate() {
        if result[i] == TileStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            result[i] = TileStatus::Present;
            *count -= 1;
        }
    }

    Ok(result)
}

fn char_counts(chars: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Scored feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<TileStatus>);

impl Feedback {
    /// Score `guess` against `solution`
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the strings differ in length.
    pub fn calculate(guess: &str, solution: &str) -> Result<Self, ScoreError> {
        score(guess, solution).map(Self)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[TileStatus] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every tile is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&t| t == TileStatus::Correct)
    }

    /// Count the number of correct tiles
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&t| t == TileStatus::Correct).count()
    }

    /// Count the number of present tiles
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&t| t == TileStatus::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.to_emoji()).collect()
    }
}

impl From<Vec<TileStatus>> for Feedback {
    fn from(tiles: Vec<TileStatus>) -> Self {
        Self(tiles)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            write!(f, "{}", tile.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GGG" or "🟩🟨⬛🟩🟩🟩"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Empty feedback string".to_string());
        }
        s.chars()
            .map(TileStatus::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self)
            .ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
