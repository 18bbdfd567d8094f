//! Puzzle list loading utilities
//!
//! Provides functions to load puzzles from files or use embedded constants.
//!
//! The file format is one puzzle per line, `<target> <solution>`. Blank
//! lines and lines starting with `#` are ignored.

use super::Puzzle;
use std::fs;
use std::io;
use std::path::Path;

/// Load puzzles from a file
///
/// Returns a vector of valid puzzles, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use numble::puzzles::loader::load_from_file;
///
/// let puzzles = load_from_file("data/puzzles.txt").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Puzzle>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(parse_line).collect())
}

/// Read raw `(target, solution)` entries without validating solutions
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<(i64, String)>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .filter_map(parse_entry)
        .map(|(target, solution)| (target, solution.to_string()))
        .collect())
}

/// Split a `<target> <solution>` line into its fields
///
/// Returns `None` for blank lines, comments, and lines whose target is not
/// an integer.
#[must_use]
pub fn parse_entry(line: &str) -> Option<(i64, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (target, solution) = trimmed.split_once(char::is_whitespace)?;
    Some((target.parse().ok()?, solution.trim()))
}

/// Parse a single line into a validated puzzle
#[must_use]
pub fn parse_line(line: &str) -> Option<Puzzle> {
    let (target, solution) = parse_entry(line)?;
    match Puzzle::new(target, solution) {
        Ok(puzzle) => Some(puzzle),
        Err(e) => {
            log::debug!("Skipping puzzle line '{}': {e}", line.trim());
            None
        }
    }
}

/// Convert embedded pairs to a Puzzle vector
///
/// # Examples
/// ```
/// use numble::puzzles::loader::puzzles_from_slice;
/// use numble::puzzles::PUZZLES;
///
/// let puzzles = puzzles_from_slice(PUZZLES);
/// assert_eq!(puzzles.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn puzzles_from_slice(slice: &[(i64, &str)]) -> Vec<Puzzle> {
    slice
        .iter()
        .filter_map(|&(target, solution)| Puzzle::new(target, solution).ok())
        .collect()
}
