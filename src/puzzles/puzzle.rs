//! Puzzle representation
//!
//! A puzzle pairs a numeric target with the hidden solution expression.

use crate::core::{ExpressionError, Value, check_syntax, evaluate, normalize};
use std::fmt;

/// A target number and the expression the player must find
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target: i64,
    solution: String,
}

/// Error type for invalid puzzles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The solution is not a valid expression
    InvalidExpression(ExpressionError),
    /// The solution contains superfluous leading zeros
    NotNormalized { normalized: String },
    /// The solution does not evaluate to the target
    WrongValue { target: i64, actual: Value },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExpression(e) => write!(f, "Invalid solution: {e}"),
            Self::NotNormalized { normalized } => {
                write!(f, "Solution has leading zeros (expected {normalized})")
            }
            Self::WrongValue { target, actual } => {
                write!(f, "Solution evaluates to {actual}, not {target}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

impl From<ExpressionError> for PuzzleError {
    fn from(e: ExpressionError) -> Self {
        Self::InvalidExpression(e)
    }
}

impl Puzzle {
    /// Create a new puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - The solution is not a valid expression
    /// - The solution is not in normalized form
    /// - The solution does not evaluate exactly to the target
    ///
    /// # Examples
    /// ```
    /// use numble::puzzles::Puzzle;
    ///
    /// let puzzle = Puzzle::new(42, "50-8*1").unwrap();
    /// assert_eq!(puzzle.len(), 6);
    ///
    /// assert!(Puzzle::new(41, "50-8*1").is_err());
    /// assert!(Puzzle::new(42, "050-8").is_err());
    /// ```
    pub fn new(target: i64, solution: impl Into<String>) -> Result<Self, PuzzleError> {
        let solution: String = solution.into();

        check_syntax(&solution)?;
        let actual = evaluate(&solution)?;

        let normalized = normalize(&solution);
        if normalized != solution {
            return Err(PuzzleError::NotNormalized { normalized });
        }

        if actual != Value::from_integer(target) {
            return Err(PuzzleError::WrongValue { target, actual });
        }

        Ok(Self { target, solution })
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Number of tiles in a row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.solution.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solution.is_empty()
    }

    /// Solution character at a tile position
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.solution.chars().nth(position)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.solution, self.target)
    }
}
