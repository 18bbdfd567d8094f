//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_candidates_result, print_eval_result, print_score_result, print_solve_result,
    print_statistics, print_verify_statistics,
};
