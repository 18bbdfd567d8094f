//! Solving assistant
//!
//! Enumerates candidate solutions for a target and filters them by the
//! feedback history.

mod engine;
mod enumerate;

pub use engine::{Solver, filter_candidates, suggest};
pub use enumerate::{MAX_LENGTH, enumerate};
