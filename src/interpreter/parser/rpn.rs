use tracing::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Context, TokenKind},
        operator::BinaryOperator,
        parser::{
            core::{ParseResult, unexpected_character},
            primary::parse_primary,
        },
    },
};

/// Operand stack for folding an RPN run. Grows as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    /// Creates a stack holding `first` at depth 1.
    #[must_use]
    pub fn new(first: f64) -> Self {
        Self { values: vec![first] }
    }

    /// Number of operands on the stack.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.values.len()
    }

    /// Pushes an operand on top of the stack.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pops the top two operands as `(left, right)`, where `right` was on
    /// top. Returns `None` and leaves the stack untouched when fewer than two
    /// are present.
    ///
    /// # Example
    /// ```
    /// use mixcalc::interpreter::parser::rpn::OperandStack;
    ///
    /// let mut stack = OperandStack::new(8.0);
    /// assert_eq!(stack.pop_pair(), None);
    /// assert_eq!(stack.depth(), 1);
    ///
    /// stack.push(2.0);
    /// assert_eq!(stack.pop_pair(), Some((8.0, 2.0)));
    /// assert_eq!(stack.depth(), 0);
    /// ```
    pub fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let right = self.values.pop()?;
        let left = self.values.pop()?;
        Some((left, right))
    }

    /// Returns the single remaining value, or `None` if the depth is not 1.
    #[must_use]
    pub fn into_result(self) -> Option<f64> {
        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}

/// Folds a run of postfix tokens, starting from an operand the infix parser
/// already evaluated.
///
/// Operands (numbers or parenthesized groups) are pushed; an operator pops
/// two operands and pushes the result. Each time an operator brings the
/// stack back to a single value the next token is peeked: a number chains
/// another RPN expression onto the run, anything else ends it and the value
/// is returned to the caller. Only a number continues the run at that point,
/// so `2 3 + (4)` ends the run before `(4)`.
///
/// # Errors
/// - `UnbalancedRpn` if the run ends with more than one operand on the
///   stack, pointing at the token that ended it.
/// - `ExpectedOperand` if an operator finds fewer than two operands.
/// - `UnexpectedCharacter` for unknown input inside the run.
/// - Any error raised while parsing an operand.
///
/// # Example
/// ```
/// use mixcalc::interpreter::{lexer::Context, parser::rpn::parse_rpn};
///
/// let mut context = Context::new("3 4 * +");
/// assert_eq!(parse_rpn(&mut context, 2.0).unwrap(), 14.0);
/// ```
pub fn parse_rpn(context: &mut Context<'_>, first_operand: f64) -> ParseResult<f64> {
    let mut stack = OperandStack::new(first_operand);

    loop {
        let token = context.peek_token();

        if let Some(op) = BinaryOperator::from_token(&token.kind) {
            context.next_token();
            let (left, right) =
                stack.pop_pair()
                     .ok_or(ParseError::ExpectedOperand { offset: token.offset })?;
            trace!(%op, left, right, "applying RPN operator");
            stack.push(op.apply(left, right));

            if stack.depth() == 1 && !matches!(context.peek_token().kind, TokenKind::Number(_)) {
                break;
            }
            continue;
        }

        match token.kind {
            _ if token.starts_operand() => {
                let value = parse_primary(context)?;
                stack.push(value);
            },
            TokenKind::Unexpected => return Err(unexpected_character(context, token)),
            _ if stack.depth() > 1 => {
                return Err(ParseError::UnbalancedRpn { depth:  stack.depth(),
                                                       offset: token.offset, });
            },
            _ => break,
        }
    }

    let depth = stack.depth();
    let offset = context.offset();
    let value = stack.into_result()
                     .ok_or(ParseError::UnbalancedRpn { depth, offset })?;
    trace!(value, "RPN run folded");
    Ok(value)
}
