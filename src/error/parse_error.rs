#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a line.
///
/// Every variant is terminal: the first error ends the statement and no
/// partial result is returned.
pub enum ParseError {
    /// A character that starts no valid token.
    UnexpectedCharacter {
        /// The character found in the source.
        found:  char,
        /// Byte offset of the character.
        offset: usize,
    },
    /// An opening parenthesis `(` was never closed.
    MissingParenthesis {
        /// Byte offset of the token found where `)` was expected.
        offset: usize,
    },
    /// A closing parenthesis `)` with no matching `(`.
    UnmatchedParenthesis {
        /// Byte offset of the `)`.
        offset: usize,
    },
    /// A number or `(` was expected but something else was found.
    ExpectedOperand {
        /// Byte offset of the token found instead.
        offset: usize,
    },
    /// An RPN run ended while more than one operand was left on its stack.
    UnbalancedRpn {
        /// Number of operands left on the stack.
        depth:  usize,
        /// Byte offset of the token that ended the run.
        offset: usize,
    },
    /// Parenthesized groups are nested too deeply to evaluate.
    NestingTooDeep {
        /// Byte offset of the `(` that exceeded the limit.
        offset: usize,
    },
    /// Input remained after a complete statement.
    UnexpectedTrailingToken {
        /// Byte offset of the first leftover token.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the headline of the error, without position information.
    ///
    /// # Example
    /// ```
    /// use mixcalc::error::ParseError;
    ///
    /// let error = ParseError::MissingParenthesis { offset: 6 };
    /// assert_eq!(error.message(), "Missing parenthesis");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedCharacter { found, .. } => {
                format!("Unexpected character {}", found.escape_debug())
            },
            Self::MissingParenthesis { .. } => "Missing parenthesis".to_string(),
            Self::UnmatchedParenthesis { .. } => "Unmatched parenthesis".to_string(),
            Self::ExpectedOperand { .. } => "Expression must start with a number".to_string(),
            Self::UnbalancedRpn { .. } => "RPN stack must be emptied".to_string(),
            Self::NestingTooDeep { .. } => "Parentheses nested too deeply".to_string(),
            Self::UnexpectedTrailingToken { .. } => "Unexpected input after expression".to_string(),
        }
    }

    /// Returns a short suggestion shown under the caret.
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::UnexpectedCharacter { .. } => "only numbers, + - * / and parentheses are allowed",
            Self::MissingParenthesis { .. } => "expected ')' here",
            Self::UnmatchedParenthesis { .. } => "this ')' has no matching '('",
            Self::ExpectedOperand { .. } => "expected a number or '(' here",
            Self::UnbalancedRpn { .. } => "operands are left over, add an operator",
            Self::NestingTooDeep { .. } => "split the expression into fewer nested groups",
            Self::UnexpectedTrailingToken { .. } => "expected end of line here",
        }
    }

    /// Returns the byte offset of the offending token within the line.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::MissingParenthesis { offset }
            | Self::UnmatchedParenthesis { offset }
            | Self::ExpectedOperand { offset }
            | Self::UnbalancedRpn { offset, .. }
            | Self::NestingTooDeep { offset }
            | Self::UnexpectedTrailingToken { offset } => *offset,
        }
    }

    /// Returns `true` for errors raised by input the lexer could not
    /// tokenize, `false` for syntax errors.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::UnexpectedCharacter { .. })
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedRpn { depth, offset } => write!(f,
                                                            "Error at offset {offset}: {} ({depth} operands left).",
                                                            self.message()),
            _ => write!(f, "Error at offset {}: {}.", self.offset(), self.message()),
        }
    }
}

impl std::error::Error for ParseError {}
