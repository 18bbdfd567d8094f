//! Lexical units of an arithmetic expression
//!
//! The alphabet is fixed: decimal digits and the four binary operators.

use super::expression::{ExpressionError, Value};
use num::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};
use std::fmt;

/// One of the four binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in display order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Parse an operator symbol
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The symbol this operator is written as
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Whether this operator belongs to the multiplicative tier
    #[inline]
    #[must_use]
    pub const fn binds_tight(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Apply the operator with checked arithmetic
    ///
    /// # Errors
    /// - `DivisionByZero` if dividing by zero
    /// - `Overflow` if the exact result does not fit the value type
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, ExpressionError> {
        let result = match self {
            Self::Add => lhs.checked_add(&rhs),
            Self::Sub => lhs.checked_sub(&rhs),
            Self::Mul => lhs.checked_mul(&rhs),
            Self::Div => {
                if rhs.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                lhs.checked_div(&rhs)
            }
        };

        result.ok_or(ExpressionError::Overflow)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A token produced by tokenizing an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A non-negative number (a whole digit run, or an intermediate result)
    Number(Value),
    Operator(Operator),
}

impl Token {
    /// Get the numeric payload, if this is a number
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Value> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Operator(_) => None,
        }
    }

    /// Get the operator payload, if this is an operator
    #[inline]
    #[must_use]
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::from_integer(n)
    }

    #[test]
    fn operator_symbols_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_char(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_char('='), None);
        assert_eq!(Operator::from_char('x'), None);
    }

    #[test]
    fn operator_precedence_tiers() {
        assert!(Operator::Mul.binds_tight());
        assert!(Operator::Div.binds_tight());
        assert!(!Operator::Add.binds_tight());
        assert!(!Operator::Sub.binds_tight());
    }

    #[test]
    fn apply_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(int(2), int(3)), Ok(int(5)));
        assert_eq!(Operator::Sub.apply(int(2), int(3)), Ok(int(-1)));
        assert_eq!(Operator::Mul.apply(int(4), int(3)), Ok(int(12)));
        assert_eq!(Operator::Div.apply(int(7), int(2)), Ok(Value::new(7, 2)));
    }

    #[test]
    fn apply_division_by_zero() {
        assert_eq!(
            Operator::Div.apply(int(5), int(0)),
            Err(ExpressionError::DivisionByZero)
        );
    }

    #[test]
    fn apply_overflow_is_reported() {
        assert_eq!(
            Operator::Mul.apply(int(i64::MAX), int(2)),
            Err(ExpressionError::Overflow)
        );
    }

    #[test]
    fn token_accessors() {
        let number = Token::Number(int(42));
        let op = Token::Operator(Operator::Mul);

        assert_eq!(number.as_number(), Some(int(42)));
        assert_eq!(number.as_operator(), None);
        assert_eq!(op.as_operator(), Some(Operator::Mul));
        assert_eq!(op.as_number(), None);
        assert_eq!(format!("{number}{op}"), "42*");
    }
}
