//! Command implementations

pub mod eval;
pub mod play;
pub mod solve;
pub mod verify;

pub use eval::{EvalResult, ScoreResult, evaluate_expression, score_guess};
pub use play::{EntryError, PlayCommand, enter_guess, run_play};
pub use solve::{
    CandidatesResult, GuessStep, SolveConfig, SolveResult, autoplay, list_candidates,
};
pub use verify::{InvalidEntry, VerifyStatistics, run_verify};
