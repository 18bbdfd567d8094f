//! Arithmetic expression evaluation over a fixed alphabet
//!
//! Expressions are strings of decimal digits and the binary operators
//! `+ - * /`. There are no parentheses and no unary operators.
//!
//! Evaluation is a two-pass left-to-right reduction:
//! 1. Every `*` and `/` is folded into its neighbouring operands in place
//! 2. The remaining `number (op number)*` sequence is folded strictly left to right
//!
//! This yields the usual precedence (multiplicative before additive) with
//! left associativity inside each tier. Values are exact rationals, so
//! `7/2` evaluates to seven halves rather than a truncated integer.

use super::token::{Operator, Token};
use num::rational::Rational64;
use std::fmt;

/// Exact numeric value of an expression
pub type Value = Rational64;

/// Every character an expression may contain
pub const ALPHABET: [char; 14] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/',
];

/// Reasons an expression fails to evaluate
///
/// Callers that only need a yes/no answer should use [`is_valid`]; the
/// variants exist for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    /// The expression has no characters
    Empty,
    /// A character outside the digit/operator alphabet
    InvalidCharacter { ch: char, position: usize },
    /// An operator at the start, at the end, or next to another operator
    MisplacedOperator { position: usize },
    /// A `*` or `/` without a number on both sides
    MissingOperand,
    /// A `/` whose right operand is zero
    DivisionByZero,
    /// The reduced sequence does not alternate number/operator/number
    IncompleteSequence,
    /// A number or intermediate result does not fit in 64 bits
    Overflow,
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Expression is empty"),
            Self::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character '{ch}' at position {position}")
            }
            Self::MisplacedOperator { position } => {
                write!(f, "Misplaced operator at position {position}")
            }
            Self::MissingOperand => write!(f, "Operator is missing an operand"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::IncompleteSequence => write!(f, "Expression is incomplete"),
            Self::Overflow => write!(f, "Number too large"),
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Check whether a character belongs to the expression alphabet
#[inline]
#[must_use]
pub const fn is_alphabet(ch: char) -> bool {
    ch.is_ascii_digit() || Operator::from_char(ch).is_some()
}

/// Split an expression into number and operator tokens
///
/// Contiguous digits form a single number token (`"007"` is the number 7).
///
/// # Errors
/// - `InvalidCharacter` for anything outside the alphabet
/// - `Overflow` for a digit run that does not fit in an `i64`
///
/// # Examples
/// ```
/// use numble::core::{Operator, Token, tokenize};
///
/// let tokens = tokenize("12+3").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], Token::Operator(Operator::Add));
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut run_start: Option<usize> = None;

    for (position, (offset, ch)) in input.char_indices().enumerate() {
        if ch.is_ascii_digit() {
            run_start.get_or_insert(offset);
            continue;
        }

        if let Some(start) = run_start.take() {
            tokens.push(parse_number(&input[start..offset])?);
        }

        let op = Operator::from_char(ch).ok_or(ExpressionError::InvalidCharacter { ch, position })?;
        tokens.push(Token::Operator(op));
    }

    if let Some(start) = run_start {
        tokens.push(parse_number(&input[start..])?);
    }

    Ok(tokens)
}

fn parse_number(digits: &str) -> Result<Token, ExpressionError> {
    digits
        .parse::<i64>()
        .map(|n| Token::Number(Value::from_integer(n)))
        .map_err(|_| ExpressionError::Overflow)
}

/// Evaluate an expression
///
/// # Errors
/// Returns the first failure found: lexical (`InvalidCharacter`), structural
/// (`Empty`, `MissingOperand`, `IncompleteSequence`) or arithmetic
/// (`DivisionByZero`, `Overflow`).
///
/// # Examples
/// ```
/// use numble::core::{Value, evaluate};
///
/// assert_eq!(evaluate("50-8*1"), Ok(Value::from_integer(42)));
/// assert_eq!(evaluate("7/2"), Ok(Value::new(7, 2)));
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(input: &str) -> Result<Value, ExpressionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let reduced = reduce_multiplicative(&tokens)?;
    fold_additive(&reduced)
}

/// First pass: replace each `lhs (*|/) rhs` with its result
///
/// The right operand is always the literal token following the operator,
/// so a zero divisor is detected before any additive folding happens.
fn reduce_multiplicative(tokens: &[Token]) -> Result<Vec<Token>, ExpressionError> {
    let mut reduced: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter();

    while let Some(&token) = iter.next() {
        match token {
            Token::Operator(op) if op.binds_tight() => {
                let lhs = reduced
                    .pop()
                    .and_then(|t| t.as_number())
                    .ok_or(ExpressionError::MissingOperand)?;
                let rhs = iter
                    .next()
                    .and_then(Token::as_number)
                    .ok_or(ExpressionError::MissingOperand)?;
                reduced.push(Token::Number(op.apply(lhs, rhs)?));
            }
            other => reduced.push(other),
        }
    }

    Ok(reduced)
}

/// Second pass: fold `number (+|- number)*` strictly left to right
fn fold_additive(tokens: &[Token]) -> Result<Value, ExpressionError> {
    let mut iter = tokens.iter();
    let mut acc = iter
        .next()
        .and_then(Token::as_number)
        .ok_or(ExpressionError::IncompleteSequence)?;

    while let Some(token) = iter.next() {
        let op = token
            .as_operator()
            .ok_or(ExpressionError::IncompleteSequence)?;
        let rhs = iter
            .next()
            .and_then(Token::as_number)
            .ok_or(ExpressionError::IncompleteSequence)?;
        acc = op.apply(acc, rhs)?;
    }

    Ok(acc)
}

/// Check the surface syntax of an expression without evaluating it
///
/// Rejects empty strings, characters outside the alphabet, a leading or
/// trailing operator, and two adjacent operators.
///
/// # Errors
/// `Empty`, `InvalidCharacter` or `MisplacedOperator`, with the position of
/// the first offending character.
pub fn check_syntax(input: &str) -> Result<(), ExpressionError> {
    let chars: Vec<char> = input.chars().collect();

    let (Some(&first), Some(&last)) = (chars.first(), chars.last()) else {
        return Err(ExpressionError::Empty);
    };

    if let Some((position, &ch)) = chars.iter().enumerate().find(|(_, c)| !is_alphabet(**c)) {
        return Err(ExpressionError::InvalidCharacter { ch, position });
    }

    if Operator::from_char(first).is_some() {
        return Err(ExpressionError::MisplacedOperator { position: 0 });
    }
    if Operator::from_char(last).is_some() {
        return Err(ExpressionError::MisplacedOperator {
            position: chars.len() - 1,
        });
    }

    let adjacent = chars.windows(2).position(|pair| {
        Operator::from_char(pair[0]).is_some() && Operator::from_char(pair[1]).is_some()
    });
    if let Some(i) = adjacent {
        return Err(ExpressionError::MisplacedOperator { position: i + 1 });
    }

    Ok(())
}

/// Check that an expression is well formed and evaluates
///
/// # Examples
/// ```
/// use numble::core::is_valid;
///
/// assert!(is_valid("10+5*2"));
/// assert!(!is_valid("1++2"));
/// assert!(!is_valid("+12"));
/// assert!(!is_valid("5/0"));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    check_syntax(input).is_ok() && evaluate(input).is_ok()
}

/// Check that an expression is valid and evaluates exactly to `target`
#[must_use]
pub fn evaluates_to(input: &str, target: i64) -> bool {
    check_syntax(input).is_ok() && evaluate(input) == Ok(Value::from_integer(target))
}

/// Strip superfluous leading zeros from every digit run
///
/// A run made only of zeros collapses to a single `0`. Characters outside
/// digit runs are copied unchanged.
///
/// # Examples
/// ```
/// use numble::core::normalize;
///
/// assert_eq!(normalize("01+007"), "1+7");
/// assert_eq!(normalize("0+5"), "0+5");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut digits = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            push_trimmed(&mut result, &digits);
            digits.clear();
            result.push(ch);
        }
    }
    push_trimmed(&mut result, &digits);

    result
}

fn push_trimmed(out: &mut String, digits: &str) {
    if digits.is_empty() {
        return;
    }
    let trimmed = digits.trim_start_matches('0');
    out.push_str(if trimmed.is_empty() { "0" } else { trimmed });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::from_integer(n)
    }

    #[test]
    fn tokenize_collapses_digit_runs() {
        let tokens = tokenize("120-7").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(int(120)),
                Token::Operator(Operator::Sub),
                Token::Number(int(7)),
            ]
        );
    }

    #[test]
    fn tokenize_leading_zeros_parse_as_integers() {
        let tokens = tokenize("007").unwrap();
        assert_eq!(tokens, vec![Token::Number(int(7))]);
    }

    #[test]
    fn tokenize_rejects_foreign_characters() {
        assert_eq!(
            tokenize("1+2=3"),
            Err(ExpressionError::InvalidCharacter {
                ch: '=',
                position: 3
            })
        );
        assert_eq!(
            tokenize("(1)"),
            Err(ExpressionError::InvalidCharacter {
                ch: '(',
                position: 0
            })
        );
    }

    #[test]
    fn tokenize_keeps_malformed_operator_sequences() {
        // Structure is not the tokenizer's concern
        let tokens = tokenize("+*").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn evaluate_literal_scenarios() {
        assert_eq!(evaluate("50-8*1"), Ok(int(42)));
        assert_eq!(evaluate("01+02"), Ok(int(3)));
        assert!(evaluate("1++2").is_err());
        assert_eq!(evaluate("5/0"), Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn evaluate_precedence() {
        for a in 0..10 {
            for b in 0..10 {
                for c in 0..10 {
                    let expr = format!("{a}+{b}*{c}");
                    assert_eq!(evaluate(&expr), Ok(int(a + b * c)), "{expr}");
                }
            }
        }
        assert_eq!(evaluate("2*3+4*5"), Ok(int(26)));
        assert_eq!(evaluate("1+2*3-4/2"), Ok(int(5)));
    }

    #[test]
    fn evaluate_left_associative() {
        assert_eq!(evaluate("9-3-2"), Ok(int(4)));
        assert_eq!(evaluate("8/4/2"), Ok(int(1)));
        assert_eq!(evaluate("2*6/3"), Ok(int(4)));
        assert_eq!(evaluate("10-2+3"), Ok(int(11)));
    }

    #[test]
    fn evaluate_keeps_fractions_exact() {
        assert_eq!(evaluate("7/2"), Ok(Value::new(7, 2)));
        assert_eq!(evaluate("1/3*3"), Ok(int(1)));
        assert_eq!(evaluate("1/2+1/2"), Ok(int(1)));
    }

    #[test]
    fn evaluate_negative_results_allowed() {
        assert_eq!(evaluate("3-10"), Ok(int(-7)));
    }

    #[test]
    fn evaluate_division_by_zero_literal_operand() {
        for expr in ["5/0", "5/00", "1+5/0", "5/0*3", "0/0"] {
            assert_eq!(evaluate(expr), Err(ExpressionError::DivisionByZero), "{expr}");
        }
        // Zero only after additive folding is not a zero divisor
        assert_eq!(evaluate("5/1-1"), Ok(int(4)));
        assert_eq!(evaluate("0/5"), Ok(int(0)));
    }

    #[test]
    fn evaluate_structural_failures() {
        assert_eq!(evaluate(""), Err(ExpressionError::Empty));
        assert_eq!(evaluate("*5"), Err(ExpressionError::MissingOperand));
        assert_eq!(evaluate("5*"), Err(ExpressionError::MissingOperand));
        assert_eq!(evaluate("5+*2"), Err(ExpressionError::MissingOperand));
        assert_eq!(evaluate("-5"), Err(ExpressionError::IncompleteSequence));
        assert_eq!(evaluate("5-"), Err(ExpressionError::IncompleteSequence));
        assert_eq!(evaluate("1++2"), Err(ExpressionError::IncompleteSequence));
    }

    #[test]
    fn evaluate_overflow() {
        assert_eq!(
            evaluate("99999999999999999999"),
            Err(ExpressionError::Overflow)
        );
        assert_eq!(
            evaluate("9223372036854775807+1"),
            Err(ExpressionError::Overflow)
        );
    }

    #[test]
    fn check_syntax_attribution() {
        assert_eq!(check_syntax(""), Err(ExpressionError::Empty));
        assert_eq!(
            check_syntax("1a2"),
            Err(ExpressionError::InvalidCharacter {
                ch: 'a',
                position: 1
            })
        );
        assert_eq!(
            check_syntax("+12"),
            Err(ExpressionError::MisplacedOperator { position: 0 })
        );
        assert_eq!(
            check_syntax("12-"),
            Err(ExpressionError::MisplacedOperator { position: 2 })
        );
        assert_eq!(
            check_syntax("1*-2"),
            Err(ExpressionError::MisplacedOperator { position: 2 })
        );
        assert_eq!(check_syntax("5/0"), Ok(()));
    }

    #[test]
    fn is_valid_combines_syntax_and_evaluation() {
        assert!(is_valid("10+5*2"));
        assert!(is_valid("7/2"));
        assert!(is_valid("0"));
        assert!(!is_valid(""));
        assert!(!is_valid("1++2"));
        assert!(!is_valid("5/0"));
        assert!(!is_valid("12 3"));
    }

    #[test]
    fn validity_coherent_with_evaluation() {
        // For syntactically clean strings, validity is exactly evaluability
        for expr in ["1+2", "5/0", "9/3-3", "8/0+1", "0*0", "99/9"] {
            assert!(check_syntax(expr).is_ok());
            assert_eq!(is_valid(expr), evaluate(expr).is_ok(), "{expr}");
        }
    }

    #[test]
    fn evaluates_to_target() {
        assert!(evaluates_to("50-8*1", 42));
        assert!(!evaluates_to("50-8*1", 41));
        assert!(!evaluates_to("7/2", 3));
        assert!(!evaluates_to("+42", 42));
    }

    #[test]
    fn normalize_literal_scenarios() {
        assert_eq!(normalize("007+3"), "7+3");
        assert_eq!(normalize("0+5"), "0+5");
        assert_eq!(normalize("01+007"), "1+7");
        assert_eq!(normalize("000"), "0");
        assert_eq!(normalize("10+100"), "10+100");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for expr in ["007+3", "0+5", "000*010", "1/01", "90-09*3"] {
            let once = normalize(expr);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_preserves_value() {
        for expr in ["007+3", "01+02", "010*010", "100/010"] {
            assert_eq!(evaluate(&normalize(expr)), evaluate(expr));
        }
    }

    #[test]
    fn alphabet_membership() {
        for ch in ALPHABET {
            assert!(is_alphabet(ch));
        }
        assert!(!is_alphabet('='));
        assert!(!is_alphabet(' '));
        assert!(!is_alphabet('x'));
    }
}
