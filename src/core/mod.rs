//! Core evaluation engine
//!
//! Pure functions with no I/O: expression tokenizing, evaluation and
//! normalization, and duplicate-aware guess scoring. The two halves are
//! independent of each other.

mod expression;
mod feedback;
mod token;

pub use expression::{
    ALPHABET, ExpressionError, Value, check_syntax, evaluate, evaluates_to, is_alphabet, is_valid,
    normalize, tokenize,
};
pub use feedback::{Feedback, ScoreError, TileStatus, score};
pub use token::{Operator, Token};
