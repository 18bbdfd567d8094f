//! Game-state reducer
//!
//! Consumes the core engine: validates submitted guesses against the
//! target, scores accepted ones, and tracks rows, hints and the outcome.

mod state;
mod stats;

pub use state::{Game, GameConfig, GameStatus, HintError, Row, SubmitError};
pub use stats::Statistics;
