use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// Binding power of `+` and `-`.
pub const TERM_PRECEDENCE: u8 = 10;
/// Binding power of `*` and `/`.
pub const FACTOR_PRECEDENCE: u8 = 20;

/// The four arithmetic operators, shared by both notations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Maps a token to its corresponding binary operator.
    ///
    /// # Example
    /// ```
    /// use mixcalc::interpreter::{lexer::TokenKind, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::from_token(&TokenKind::Mul),
    ///            Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_token(&TokenKind::RParen), None);
    /// ```
    #[must_use]
    pub const fn from_token(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Sub),
            TokenKind::Mul => Some(Self::Mul),
            TokenKind::Div => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the binding power used by precedence climbing.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => TERM_PRECEDENCE,
            Self::Mul | Self::Div => FACTOR_PRECEDENCE,
        }
    }

    /// Applies the operator with IEEE-754 semantics. Division by zero gives
    /// an infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}
