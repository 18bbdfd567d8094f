//! Puzzle source
//!
//! Provides the embedded puzzle list compiled into the binary, a file loader
//! for custom lists, and daily/random selection.

mod embedded;
pub mod loader;
mod puzzle;
pub mod select;

pub use embedded::{PUZZLES, PUZZLES_COUNT};
pub use puzzle::{Puzzle, PuzzleError};
