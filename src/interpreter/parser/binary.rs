use tracing::trace;

use crate::interpreter::{
    lexer::{Context, TokenKind},
    operator::BinaryOperator,
    parser::{
        core::{ParseResult, unexpected_character},
        primary::parse_primary,
        rpn::parse_rpn,
    },
};

/// Parses and evaluates an expression by precedence climbing.
///
/// Only operators binding at least as tightly as `min_precedence` are folded
/// at this level. The right-hand side of an operator is parsed at one above
/// the operator's own precedence, which makes equal-precedence chains
/// left-associative: `8 - 3 - 2` is `(8 - 3) - 2`.
///
/// When an operand follows the left-hand value with no operator in between,
/// the input has switched to RPN. The rest of this expression is folded by
/// [`parse_rpn`] seeded with the left-hand value, and climbing stops at this
/// level. The enclosing level may keep climbing with the folded value.
///
/// `)`, newlines and end of input end the expression.
///
/// # Errors
/// Propagates the first error of any nested primary, expression or RPN run,
/// and reports `UnexpectedCharacter` for unknown input in operator position.
///
/// # Example
/// ```
/// use mixcalc::interpreter::{lexer::Context, parser::binary::parse_expression};
///
/// let mut context = Context::new("2 + 3 * 4");
/// assert_eq!(parse_expression(&mut context, 0).unwrap(), 14.0);
/// ```
pub fn parse_expression(context: &mut Context<'_>, min_precedence: u8) -> ParseResult<f64> {
    let mut left = parse_primary(context)?;

    loop {
        let token = context.peek_token();
        let Some(op) = BinaryOperator::from_token(&token.kind) else {
            if token.starts_operand() {
                trace!(offset = token.offset, seed = left, "switching to RPN");
                return parse_rpn(context, left);
            }
            if token.kind == TokenKind::Unexpected {
                return Err(unexpected_character(context, token));
            }
            break;
        };

        let precedence = op.precedence();
        if precedence < min_precedence {
            break;
        }

        context.next_token();
        let right = parse_expression(context, precedence + 1)?;
        left = op.apply(left, right);
    }

    Ok(left)
}
