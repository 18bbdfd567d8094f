//! Expression and scoring commands
//!
//! One-shot inspection of an expression or a guess/solution pair.

use crate::core::{
    ExpressionError, Feedback, Value, check_syntax, evaluate, is_valid, normalize, tokenize,
};

/// Result of inspecting an expression
pub struct EvalResult {
    pub input: String,
    pub normalized: String,
    pub token_count: Option<usize>,
    pub syntax: Result<(), ExpressionError>,
    pub value: Result<Value, ExpressionError>,
    pub valid: bool,
}

impl EvalResult {
    /// The value as an integer, if it is one
    #[must_use]
    pub fn integer_value(&self) -> Option<i64> {
        self.value
            .as_ref()
            .ok()
            .filter(|v| v.is_integer())
            .map(Value::to_integer)
    }
}

/// Inspect an expression: syntax, value and normalized form
#[must_use]
pub fn evaluate_expression(input: &str) -> EvalResult {
    EvalResult {
        input: input.to_string(),
        normalized: normalize(input),
        token_count: tokenize(input).ok().map(|tokens| tokens.len()),
        syntax: check_syntax(input),
        value: evaluate(input),
        valid: is_valid(input),
    }
}

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub solution: String,
    pub feedback: Feedback,
}

/// Score a guess against a solution
///
/// # Errors
///
/// Returns an error if the guess and solution differ in length.
pub fn score_guess(guess: &str, solution: &str) -> Result<ScoreResult, String> {
    let feedback = Feedback::calculate(guess, solution).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        guess: guess.to_string(),
        solution: solution.to_string(),
        feedback,
    })
}
