//! Numble
//!
//! An arithmetic guessing game: find the hidden equation that equals the
//! target. Guesses are checked with an exact left-to-right evaluator that
//! honours operator precedence, and scored tile by tile with
//! duplicate-aware feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use numble::core::{TileStatus, evaluate, is_valid, normalize, score};
//!
//! // Evaluate and validate expressions
//! assert!(is_valid("10+5*2"));
//! assert_eq!(evaluate("10+5*2").unwrap().to_integer(), 20);
//! assert_eq!(normalize("010+5*2"), "10+5*2");
//!
//! // Score a guess against the solution
//! let tiles = score("5*2+10", "10+5*2").unwrap();
//! assert!(tiles.iter().all(|&t| t == TileStatus::Present));
//! ```

// Expression engine and scoring
pub mod core;

// Game state
pub mod game;

// Puzzle lists
pub mod puzzles;

// Solving assistant
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
