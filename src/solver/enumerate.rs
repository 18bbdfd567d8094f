//! Candidate expression enumeration
//!
//! Builds every normalized expression of a given length that evaluates to a
//! target. Strings are grown character by character so that malformed
//! shapes (leading, trailing or doubled operators, leading zeros) are never
//! produced, and only complete strings are evaluated.

use crate::core::{Operator, evaluates_to};
use rayon::prelude::*;

/// Longest row the enumerator will search
///
/// The search space grows roughly fourteenfold per extra tile.
pub const MAX_LENGTH: usize = 7;

/// Enumerate all candidate solutions for `target` with exactly `length` tiles
///
/// Results are in lexicographic alphabet order (digits first, then `+ - * /`).
/// Lengths of zero or above [`MAX_LENGTH`] yield no candidates.
///
/// # Examples
/// ```
/// use numble::solver::enumerate;
///
/// let candidates = enumerate(6, 3);
/// assert!(candidates.contains(&"2*3".to_string()));
/// assert!(candidates.contains(&"9-3".to_string()));
/// ```
#[must_use]
pub fn enumerate(target: i64, length: usize) -> Vec<String> {
    if length == 0 || length > MAX_LENGTH {
        return Vec::new();
    }

    (b'0'..=b'9')
        .into_par_iter()
        .flat_map_iter(|first| {
            let mut prefix = String::with_capacity(length);
            prefix.push(char::from(first));
            let mut found = Vec::new();
            extend(&mut prefix, length - 1, target, &mut found);
            found
        })
        .collect()
}

fn extend(prefix: &mut String, remaining: usize, target: i64, out: &mut Vec<String>) {
    if remaining == 0 {
        if evaluates_to(prefix, target) {
            out.push(prefix.clone());
        }
        return;
    }

    for next in next_chars(prefix, remaining) {
        prefix.push(next);
        extend(prefix, remaining - 1, target, out);
        prefix.pop();
    }
}

/// Characters that may follow `prefix` without breaking the shape rules
fn next_chars(prefix: &str, remaining: usize) -> Vec<char> {
    let bytes = prefix.as_bytes();
    let last = bytes.last().copied().map(char::from);

    let after_operator = last.is_none_or(|c| Operator::from_char(c).is_some());
    // A run that is just "0" cannot take more digits
    let lone_zero = last == Some('0')
        && bytes
            .len()
            .checked_sub(2)
            .is_none_or(|i| Operator::from_char(char::from(bytes[i])).is_some());

    let mut chars = Vec::with_capacity(14);
    if !lone_zero {
        chars.extend('0'..='9');
    }
    if !after_operator && remaining > 1 {
        chars.extend(Operator::ALL.iter().map(|op| op.symbol()));
    }
    chars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{check_syntax, normalize};

    #[test]
    fn enumerate_single_tile() {
        assert_eq!(enumerate(7, 1), vec!["7".to_string()]);
        assert_eq!(enumerate(0, 1), vec!["0".to_string()]);
        assert!(enumerate(10, 1).is_empty());
        assert!(enumerate(5, 0).is_empty());
    }

    #[test]
    fn enumerate_refuses_rows_beyond_limit() {
        // Returns immediately instead of searching ~14^10 strings
        assert!(enumerate(1, MAX_LENGTH + 1).is_empty());
        assert!(enumerate(1, 12).is_empty());
    }

    #[test]
    fn enumerate_three_tiles() {
        let candidates = enumerate(6, 3);
        for expected in ["0+6", "1+5", "2*3", "3*2", "6/1", "6-0", "9-3"] {
            assert!(
                candidates.contains(&expected.to_string()),
                "missing {expected}"
            );
        }
        assert!(!candidates.contains(&"006".to_string()));
    }

    #[test]
    fn enumerate_results_are_valid_and_normalized() {
        let candidates = enumerate(12, 4);
        assert!(!candidates.is_empty());
        for candidate in &candidates {
            assert_eq!(candidate.len(), 4);
            assert!(check_syntax(candidate).is_ok(), "{candidate}");
            assert!(evaluates_to(candidate, 12), "{candidate}");
            assert_eq!(&normalize(candidate), candidate);
        }
    }

    #[test]
    fn enumerate_includes_multi_digit_runs() {
        let candidates = enumerate(12, 4);
        assert!(candidates.contains(&"10+2".to_string()));
        assert!(candidates.contains(&"24/2".to_string()));
        assert!(!candidates.contains(&"3*04".to_string()));
    }

    #[test]
    fn enumerate_is_sorted() {
        let candidates = enumerate(8, 3);
        let mut sorted = candidates.clone();
        sorted.sort_by_key(|s| s.chars().map(alphabet_rank).collect::<Vec<_>>());
        assert_eq!(candidates, sorted);
    }

    fn alphabet_rank(c: char) -> usize {
        crate::core::ALPHABET
            .iter()
            .position(|&a| a == c)
            .unwrap_or(usize::MAX)
    }

    #[test]
    fn next_chars_shape_rules() {
        // After an operator: digits only
        assert_eq!(next_chars("1+", 2).len(), 10);
        // Lone zero: operators only
        assert_eq!(next_chars("0", 2), vec!['+', '-', '*', '/']);
        assert_eq!(next_chars("1+0", 2), vec!['+', '-', '*', '/']);
        // Zero inside a longer run may continue
        assert_eq!(next_chars("10", 2).len(), 14);
        // Last tile: digits only
        assert_eq!(next_chars("12", 1).len(), 10);
        assert!(next_chars("0", 1).is_empty());
    }
}
